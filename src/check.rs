//! Read-only invariant checkers.
//!
//! Insertion and removal keep the tree ordered and balanced on their own;
//! these predicates only make that observable to tests and audits.

use std::fmt;

use crate::error::InvariantError;
use crate::tree::{Subtree, Tree};

/// First violation found during a walk, borrowing the offending keys.
enum Violation<'a, K> {
    OutOfOrder {
        key: &'a K,
        lower: Option<&'a K>,
        upper: Option<&'a K>,
    },
    HeightMismatch {
        key: &'a K,
        recorded: usize,
        expected: usize,
    },
    Unbalanced {
        key: &'a K,
        left: usize,
        right: usize,
    },
}

impl<K: Ord> Tree<K> {
    /// Returns true if every key lies strictly between the keys of its
    /// ancestors on either side.
    ///
    /// The root is checked against unbounded limits, so the extreme values of
    /// an integer key type are valid keys.
    pub fn check_ordering(&self) -> bool {
        self.root.find_disorder(None, None).is_none()
    }

    /// Runs every structural check and reports the first defect found.
    pub fn verify(&self) -> Result<(), InvariantError>
    where
        K: fmt::Debug,
    {
        if let Some(violation) = self.root.find_disorder(None, None) {
            return Err(violation.into_error());
        }
        if let Some(violation) = self.root.find_imbalance() {
            return Err(violation.into_error());
        }
        let counted = self.root.count_nodes();
        if counted != self.len() {
            return Err(InvariantError::LengthMismatch {
                counted,
                recorded: self.len(),
            });
        }
        Ok(())
    }

    /// Panics with a description of the first defect if the tree is inconsistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        K: fmt::Debug,
    {
        if let Err(err) = self.verify() {
            panic!("inconsistent tree: {err}");
        }
    }
}

impl<K> Tree<K> {
    /// Returns true if every node records the correct height and sibling
    /// heights differ by at most one.
    pub fn check_balanced(&self) -> bool {
        self.root.find_imbalance().is_none()
    }
}

impl<K> Subtree<K> {
    fn find_disorder<'a>(
        &'a self,
        lower: Option<&'a K>,
        upper: Option<&'a K>,
    ) -> Option<Violation<'a, K>>
    where
        K: Ord,
    {
        let Subtree::Node(node) = self else {
            return None;
        };
        let key = &node.key;
        let above_lower = lower.map_or(true, |lower| lower < key);
        let below_upper = upper.map_or(true, |upper| key < upper);
        if !(above_lower && below_upper) {
            return Some(Violation::OutOfOrder { key, lower, upper });
        }
        node.left
            .find_disorder(lower, Some(key))
            .or_else(|| node.right.find_disorder(Some(key), upper))
    }

    fn find_imbalance(&self) -> Option<Violation<'_, K>> {
        let Subtree::Node(node) = self else {
            return None;
        };
        let expected = node.expected_height();
        if node.height != expected {
            return Some(Violation::HeightMismatch {
                key: &node.key,
                recorded: node.height,
                expected,
            });
        }
        let left = node.left.height();
        let right = node.right.height();
        if left.abs_diff(right) > 1 {
            return Some(Violation::Unbalanced {
                key: &node.key,
                left,
                right,
            });
        }
        node.left
            .find_imbalance()
            .or_else(|| node.right.find_imbalance())
    }

    fn count_nodes(&self) -> usize {
        match self {
            Subtree::Empty => 0,
            Subtree::Node(node) => 1 + node.left.count_nodes() + node.right.count_nodes(),
        }
    }
}

fn describe_bound<K: fmt::Debug>(bound: Option<&K>, unbounded: &str) -> String {
    match bound {
        Some(key) => format!("{key:?}"),
        None => unbounded.to_owned(),
    }
}

impl<K: fmt::Debug> Violation<'_, K> {
    fn into_error(self) -> InvariantError {
        match self {
            Violation::OutOfOrder { key, lower, upper } => InvariantError::OutOfOrder {
                key: format!("{key:?}"),
                lower: describe_bound(lower, "-inf"),
                upper: describe_bound(upper, "+inf"),
            },
            Violation::HeightMismatch {
                key,
                recorded,
                expected,
            } => InvariantError::HeightMismatch {
                key: format!("{key:?}"),
                recorded,
                expected,
            },
            Violation::Unbalanced { key, left, right } => InvariantError::Unbalanced {
                key: format!("{key:?}"),
                left,
                right,
            },
        }
    }
}
