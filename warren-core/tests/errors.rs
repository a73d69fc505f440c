//! Tests for error display, stable codes, and source chaining.

use std::error::Error as _;

use rstest::rstest;
use warren_core::{ElementOutOfRange, NetworkError, NetworkErrorCode};

#[rstest]
fn node_not_found_display_names_label_and_range() {
    let err = NetworkError::NodeNotFound {
        node: 4,
        node_count: 3,
    };
    assert_eq!(format!("{err}"), "node 4 not found in network [1, 3]");
}

#[rstest]
fn negative_node_count_display_names_count() {
    let err = NetworkError::NegativeNodeCount { got: -7 };
    assert_eq!(
        format!("{err}"),
        "the number of nodes in a network must be non-negative (got -7)"
    );
}

#[rstest]
fn element_out_of_range_display_names_domain() {
    let err = ElementOutOfRange { element: 9, len: 4 };
    assert_eq!(format!("{err}"), "element 9 is outside the set domain [0, 4)");
}

#[rstest]
#[case::negative_count(
    NetworkError::NegativeNodeCount { got: -1 },
    NetworkErrorCode::NegativeNodeCount,
    "NEGATIVE_NODE_COUNT"
)]
#[case::node_not_found(
    NetworkError::NodeNotFound { node: 0, node_count: 1 },
    NetworkErrorCode::NodeNotFound,
    "NODE_NOT_FOUND"
)]
#[case::disjoint_set(
    NetworkError::DisjointSet { error: ElementOutOfRange { element: 2, len: 2 } },
    NetworkErrorCode::DisjointSet,
    "DISJOINT_SET_ELEMENT"
)]
fn codes_are_stable(
    #[case] err: NetworkError,
    #[case] code: NetworkErrorCode,
    #[case] symbol: &str,
) {
    assert_eq!(err.code(), code);
    assert_eq!(code.as_str(), symbol);
}

#[rstest]
fn disjoint_set_variant_preserves_its_source() {
    let inner = ElementOutOfRange { element: 5, len: 3 };
    let err = NetworkError::from(inner);
    assert!(matches!(err, NetworkError::DisjointSet { error } if error == inner));

    let err = NetworkError::from(inner);
    let source = err.source().expect("wrapped error must expose its source");
    assert_eq!(
        source.to_string(),
        "element 5 is outside the set domain [0, 3)"
    );
}
