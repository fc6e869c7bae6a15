use thiserror::Error;

/// Errors reported by the tree containers.
///
/// Every error is terminal for the single call that raised it. Nothing else
/// in the tree is affected; every other node remains valid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A node was constructed without a value. Nodes never exist without
    /// one, so the construction call fails outright.
    #[error("tree nodes require a value")]
    InvalidValue,

    /// Unordered `add` was called on an ordered tree, which would break its
    /// ordering invariant.
    #[error("an ordered binary tree does not support `add`; use `insert`")]
    UnsupportedOperation,
}
