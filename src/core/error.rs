use thiserror::Error;

/// Errors surfaced by the matching store
///
/// Every failure of the store is an expected, caller-recoverable condition,
/// so there is a single kind. Unknown ids, exhausted people, empty candidate
/// sets and non-positive result sizes all report `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
}

pub type StoreResult<T> = Result<T, StoreError>;
