//! Shared test utilities used across the warren crates.

pub mod tracing {
    //! A tracing layer that records spans and events for test assertions.

    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Snapshot of a created span: its name and the fields recorded at
    /// creation time.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedSpan {
        /// Span name from the static metadata.
        pub name: String,
        /// Structured fields recorded when the span was created.
        pub fields: HashMap<String, String>,
    }

    /// Snapshot of an emitted event. The human-readable message lands under
    /// the `message` field key.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedEvent {
        /// Log level of the event.
        pub level: Level,
        /// Event target string from the metadata.
        pub target: String,
        /// Structured fields attached to the event, including `message`.
        pub fields: HashMap<String, String>,
    }

    /// Layer installed during tests to capture every span and event it
    /// sees, in creation order, so instrumentation can be asserted
    /// deterministically.
    ///
    /// # Examples
    /// ```
    /// use tracing_subscriber::layer::SubscriberExt;
    /// use warren_test_support::tracing::RecordingLayer;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     tracing::info!(answer = 42, "computed");
    /// });
    /// assert_eq!(layer.events().len(), 1);
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<CapturedSpan>>>,
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    impl RecordingLayer {
        /// Returns a snapshot of the recorded spans without holding the
        /// internal lock.
        #[must_use]
        pub fn spans(&self) -> Vec<CapturedSpan> {
            self.spans.lock().expect("span store poisoned").clone()
        }

        /// Returns a snapshot of the recorded events without holding the
        /// internal lock.
        #[must_use]
        pub fn events(&self) -> Vec<CapturedEvent> {
            self.events.lock().expect("event store poisoned").clone()
        }

        /// Looks up the first recorded span with the given name.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<CapturedSpan> {
            self.spans().into_iter().find(|span| span.name == name)
        }
    }

    struct FieldCollector<'a> {
        fields: &'a mut HashMap<String, String>,
    }

    impl Visit for FieldCollector<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.fields
                .insert(field.name().to_owned(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.fields
                .insert(field.name().to_owned(), value.to_owned());
        }
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::span::Id,
            _ctx: Context<'_, S>,
        ) {
            let mut fields = HashMap::new();
            attrs.record(&mut FieldCollector {
                fields: &mut fields,
            });
            self.spans
                .lock()
                .expect("span store poisoned")
                .push(CapturedSpan {
                    name: attrs.metadata().name().to_owned(),
                    fields,
                });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldCollector {
                fields: &mut fields,
            });
            self.events
                .lock()
                .expect("event store poisoned")
                .push(CapturedEvent {
                    level: *event.metadata().level(),
                    target: event.metadata().target().to_owned(),
                    fields,
                });
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use tracing_subscriber::layer::SubscriberExt;

        #[test]
        fn records_span_fields_and_event_messages() {
            let layer = RecordingLayer::default();
            let subscriber = tracing_subscriber::registry().with(layer.clone());

            tracing::subscriber::with_default(subscriber, || {
                let span = tracing::info_span!("unit.work", items = 3);
                let _guard = span.enter();
                tracing::warn!(reason = "demo", "work skipped");
            });

            let span = layer.span("unit.work").expect("span must be recorded");
            assert_eq!(span.fields.get("items"), Some(&"3".to_owned()));

            let events = layer.events();
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].level, Level::WARN);
            assert_eq!(events[0].fields.get("message"), Some(&"work skipped".to_owned()));
            assert_eq!(events[0].fields.get("reason"), Some(&"demo".to_owned()));
        }
    }
}
