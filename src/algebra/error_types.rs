use thiserror::Error;

/// Error type returned by dense factorization kernels.  Pivot failures
/// carry the 1-based position of the offending pivot, following the
/// convention of the LAPACK `info` return code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseFactorizationError {
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Cholesky error: non-positive pivot at position {0}")]
    Cholesky(i32),
    #[error("Triangular inversion error: zero diagonal at position {0}")]
    Inverse(i32),
    #[error("Dense backend is not available in this build")]
    Unsupported,
}
