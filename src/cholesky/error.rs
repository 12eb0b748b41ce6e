use crate::algebra::DenseFactorizationError;
use crate::cholesky::SettingsError;
use thiserror::Error;

/// Error type returned by [`AdaptiveCholesky`](crate::cholesky::AdaptiveCholesky) operations.
///
/// Errors raised while checking arguments leave the factor untouched.  A
/// failure after the factor has been partially overwritten (a failed
/// decomposition or adaptivity step) also clears the constructed and
/// decomposed state, so every later operation returns
/// [`ConstructionOrder`](CholeskyError::ConstructionOrder) until a new
/// system matrix is set.  There is no rollback.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CholeskyError {
    /// An operation was called out of order, e.g. an update before the
    /// initial decomposition
    #[error("Construction order error: {0}")]
    ConstructionOrder(&'static str),
    /// Non-positive pivot.  The matrix is not (numerically) positive
    /// definite under the current regularization.  `pivot` is the 0-based
    /// position at which the failure was detected.
    #[error("Resulting matrix is not numerically positive definite (pivot {pivot})")]
    NumericalFailure { pivot: usize },
    /// Index pair or deletion list out of order or out of bounds
    #[error("Invalid index range ({k}, {l}) for a matrix of dimension {n}")]
    InvalidRange { k: usize, l: usize, n: usize },
    /// Input dimensions are incompatible with the current factor
    #[error("Incompatible dimension: expected {expected}, found {found}")]
    IncompatibleDimension { expected: usize, found: usize },
    /// A requested dense backend is not available in this build
    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(&'static str),
    /// Invalid settings
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl From<DenseFactorizationError> for CholeskyError {
    fn from(e: DenseFactorizationError) -> Self {
        match e {
            DenseFactorizationError::Cholesky(info) | DenseFactorizationError::Inverse(info) => {
                CholeskyError::NumericalFailure {
                    pivot: (info.max(1) - 1) as usize,
                }
            }
            DenseFactorizationError::IncompatibleDimension => {
                CholeskyError::IncompatibleDimension {
                    expected: 0,
                    found: 0,
                }
            }
            DenseFactorizationError::Unsupported => {
                CholeskyError::UnsupportedConfiguration("dense backend not compiled in")
            }
        }
    }
}
