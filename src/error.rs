//! Error type for solve precondition violations.

use thiserror::Error;

/// Errors reported by the enclosing-rectangle solvers.
///
/// Every precondition violation maps to [`EncloseError::InvalidArgument`];
/// the solvers have no other failure modes. Errors are raised before the
/// first pass over the input, so a failed call produces no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncloseError {
    /// The coverage target must satisfy `1 <= k <= n` over a non-empty
    /// point set.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used by the solve entry points.
pub type EncloseResult<T> = Result<T, EncloseError>;
