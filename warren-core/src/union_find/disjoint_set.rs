//! Disjoint-set (union-find) forest backing the union-find engine.
//!
//! Elements live in the dense zero-based domain `[0, len)`. `find`
//! compresses paths iteratively and `union` attaches by rank, which
//! together keep both operations amortized near-constant.

use crate::error::ElementOutOfRange;

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `len` singleton sets, one per element of `[0, len)`.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    fn check(&self, element: usize) -> Result<(), ElementOutOfRange> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(ElementOutOfRange {
                element,
                len: self.parent.len(),
            })
        }
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at
    /// it, so repeated lookups flatten the tree.
    pub(crate) fn find(&mut self, element: usize) -> Result<usize, ElementOutOfRange> {
        self.check(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`, returning the
    /// surviving root. Elements already in the same set are a no-op.
    ///
    /// The lower-rank root attaches under the higher-rank one; on a tie the
    /// first root survives and its rank grows by one.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> Result<usize, ElementOutOfRange> {
        let mut left = self.find(left)?;
        let mut right = self.find(right)?;
        if left == right {
            return Ok(left);
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        Ok(left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_representatives() {
        let mut sets = DisjointSet::new(4);
        for element in 0..4 {
            assert_eq!(sets.find(element), Ok(element));
        }
    }

    #[test]
    fn union_merges_and_repeats_are_no_ops() {
        let mut sets = DisjointSet::new(3);
        let root = sets.union(0, 1).expect("elements are in range");
        assert_eq!(sets.union(0, 1), Ok(root));
        assert_eq!(sets.union(1, 0), Ok(root));
        assert_eq!(sets.find(0), sets.find(1));
        assert_ne!(sets.find(0), sets.find(2));
    }

    #[test]
    fn rank_tie_keeps_the_first_root() {
        let mut sets = DisjointSet::new(2);
        assert_eq!(sets.union(0, 1), Ok(0));
        assert_eq!(sets.find(1), Ok(0));
    }

    #[test]
    fn lower_rank_tree_attaches_under_higher() {
        let mut sets = DisjointSet::new(4);
        // {0, 1} has rank 1 after the tie-break; singleton 2 has rank 0.
        sets.union(0, 1).expect("elements are in range");
        assert_eq!(sets.union(2, 0), Ok(0));
        assert_eq!(sets.find(2), Ok(0));
    }

    #[test]
    fn find_flattens_the_visited_path() {
        let mut sets = DisjointSet::new(4);
        sets.union(0, 1).expect("elements are in range");
        sets.union(2, 3).expect("elements are in range");
        sets.union(0, 2).expect("elements are in range");

        let root = sets.find(3).expect("element is in range");
        // After compression the deepest element points straight at the root.
        assert_eq!(sets.parent[3], root);
    }

    #[test]
    fn out_of_domain_elements_are_rejected() {
        let mut sets = DisjointSet::new(2);
        assert_eq!(
            sets.find(2),
            Err(ElementOutOfRange { element: 2, len: 2 })
        );
        assert_eq!(
            sets.union(0, 5),
            Err(ElementOutOfRange { element: 5, len: 2 })
        );
    }

    #[test]
    fn empty_set_rejects_every_element() {
        let mut sets = DisjointSet::new(0);
        assert_eq!(sets.len(), 0);
        assert_eq!(
            sets.find(0),
            Err(ElementOutOfRange { element: 0, len: 0 })
        );
    }
}
