use thiserror::Error;

/// Errors returned by the truncation functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrimError {
    /// The caller passed a negative length budget
    #[error("max_length must be a non-negative integer, got {0}")]
    InvalidMaxLength(isize),
}
