mod core;
mod gemm;
mod kernels;
pub(crate) use kernels::*;

#[cfg(feature = "lapack")]
mod lapack;
#[cfg(feature = "lapack")]
pub use self::lapack::*;
