/// Errors triggered by tree operations. A failed operation never modifies
/// the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument was rejected before the tree was touched. For example, a
    /// range query whose lower bound is greater than its upper bound.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// No node on the search path holds the requested key.
    #[error("the data was not found in the tree")]
    NotFound,
}
