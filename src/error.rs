use thiserror::Error;

/// Errors returned by store operations
///
/// There is exactly one kind: the id, sender, receiver, or status a caller
/// referenced matched nothing. Duplicate inserts are not an error (they are
/// silently ignored), and the purely numeric range queries return empty
/// collections instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainblockError {
    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ChainblockError>;
