//! Structural error taxonomy for tree construction and mutation.

/// Errors from constructing or mutating a [`Tree`](crate::tree::Tree).
///
/// All variants are precondition violations in the supplied data; the
/// failing operation leaves the tree in its prior state.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("duplicate person identifier: {0}")]
    DuplicateId(String),

    #[error("unknown person identifier: {0}")]
    UnknownId(String),

    #[error("{person} has a relation to unknown identifier {target}")]
    UnresolvedReference { person: String, target: String },

    #[error("{person} has {count} parent relations (at most 2 allowed)")]
    TooManyParents { person: String, count: usize },
}
