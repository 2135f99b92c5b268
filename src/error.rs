use thiserror::Error;

/// A structural defect found by [`Tree::verify`](crate::Tree::verify).
///
/// Keys are rendered with their `Debug` representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("key {key} lies outside the open interval ({lower}, {upper})")]
    OutOfOrder {
        key: String,
        lower: String,
        upper: String,
    },

    #[error("node {key} records height {recorded}, its children imply {expected}")]
    HeightMismatch {
        key: String,
        recorded: usize,
        expected: usize,
    },

    #[error("node {key} is out of balance: left height {left}, right height {right}")]
    Unbalanced {
        key: String,
        left: usize,
        right: usize,
    },

    #[error("tree holds {counted} nodes but records a length of {recorded}")]
    LengthMismatch { counted: usize, recorded: usize },
}

/// Invalid settings for the randomized test driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("key range must be positive, got {0}")]
    EmptyKeyRange(i32),

    #[error("tree size must be at least 1")]
    EmptyTree,

    #[error("at least one round is required")]
    NoRounds,
}
