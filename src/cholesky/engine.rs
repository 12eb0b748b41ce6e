#![allow(non_snake_case)]

use crate::algebra::*;
use crate::cholesky::{CholeskyError, SettingsError};
use enum_dispatch::*;
use std::marker::PhantomData;

/// Dense O(n³) operations on a full factor.  Incremental updates always
/// use the native kernels.
#[enum_dispatch]
pub(crate) trait DenseEngine<T>
where
    T: FloatT,
{
    /// Overwrites `A` with its lower Cholesky factor, zeroing the strict
    /// upper triangle.
    fn factor(&self, A: &mut Matrix<T>) -> Result<(), DenseFactorizationError>;

    /// Writes `(LL^T)^{-1}` into `Ainv`, which must have the size of `L`.
    fn invert(&self, L: &Matrix<T>, Ainv: &mut Matrix<T>) -> Result<(), DenseFactorizationError>;

    fn name(&self) -> &'static str;
}

#[enum_dispatch(DenseEngine<T>)]
#[derive(Debug, Clone)]
pub(crate) enum DenseBackend<T>
where
    T: FloatT,
{
    NativeEngine(NativeEngine<T>),
    LapackEngine(LapackEngine<T>),
}

impl<T> DenseBackend<T>
where
    T: FloatT,
{
    /// Resolves a backend name from the settings
    pub(crate) fn from_name(name: &str) -> Result<Self, CholeskyError> {
        match name {
            "native" => Ok(NativeEngine::default().into()),
            "auto" => {
                if cfg!(feature = "lapack") {
                    Ok(LapackEngine::default().into())
                } else {
                    Ok(NativeEngine::default().into())
                }
            }
            "lapack" => {
                if cfg!(feature = "lapack") {
                    Ok(LapackEngine::default().into())
                } else {
                    Err(CholeskyError::UnsupportedConfiguration(
                        "dense_backend \"lapack\" requires the \"lapack\" feature",
                    ))
                }
            }
            _ => Err(SettingsError::UnknownBackend(name.to_string()).into()),
        }
    }
}

// ---------------------------------------------------------
// native kernels
// ---------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub(crate) struct NativeEngine<T> {
    phantom: PhantomData<T>,
}

impl<T> DenseEngine<T> for NativeEngine<T>
where
    T: FloatT,
{
    fn factor(&self, A: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
        cholesky_in_place(A)
    }

    fn invert(&self, L: &Matrix<T>, Ainv: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
        if Ainv.size() != L.size() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }
        // A^{-1} = L^{-T} L^{-1} = X^T X
        let mut X = Matrix::zeros(L.size());
        invert_lower_triangular(L, &mut X)?;
        Ainv.mul(&X.t(), &X, T::one(), T::zero());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "native"
    }
}

// ---------------------------------------------------------
// LAPACK ?potrf / ?potri
// ---------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub(crate) struct LapackEngine<T> {
    phantom: PhantomData<T>,
}

impl<T> DenseEngine<T> for LapackEngine<T>
where
    T: FloatT,
{
    fn factor(&self, A: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
        potrf(A)
    }

    fn invert(&self, L: &Matrix<T>, Ainv: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
        potri(L, Ainv)
    }

    fn name(&self) -> &'static str {
        "lapack"
    }
}

#[cfg(feature = "lapack")]
fn potrf<T: FloatT>(A: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
    if !A.is_square() {
        return Err(DenseFactorizationError::IncompatibleDimension);
    }
    let n = A.nrows();
    if n == 0 {
        return Ok(());
    }
    let uplo = MatrixTriangle::Tril.as_blas_char();
    let mut info = 0_i32;
    T::xpotrf(uplo, n as i32, A.data_mut(), n as i32, &mut info);
    lapack_info_to_result(info, DenseFactorizationError::Cholesky)?;
    A.zero_triu();
    Ok(())
}

#[cfg(feature = "lapack")]
fn potri<T: FloatT>(L: &Matrix<T>, Ainv: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
    if !L.is_square() || Ainv.size() != L.size() {
        return Err(DenseFactorizationError::IncompatibleDimension);
    }
    let n = L.nrows();
    if n == 0 {
        return Ok(());
    }
    Ainv.copy_from(L);
    let uplo = MatrixTriangle::Tril.as_blas_char();
    let mut info = 0_i32;
    T::xpotri(uplo, n as i32, Ainv.data_mut(), n as i32, &mut info);
    lapack_info_to_result(info, DenseFactorizationError::Inverse)?;
    Ainv.symmetrize_from_tril();
    Ok(())
}

#[cfg(feature = "lapack")]
fn lapack_info_to_result(
    info: i32,
    on_pivot: fn(i32) -> DenseFactorizationError,
) -> Result<(), DenseFactorizationError> {
    match info {
        0 => Ok(()),
        i if i > 0 => Err(on_pivot(i)),
        _ => Err(DenseFactorizationError::IncompatibleDimension),
    }
}

#[cfg(not(feature = "lapack"))]
fn potrf<T: FloatT>(_A: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
    Err(DenseFactorizationError::Unsupported)
}

#[cfg(not(feature = "lapack"))]
fn potri<T: FloatT>(_L: &Matrix<T>, _Ainv: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
    Err(DenseFactorizationError::Unsupported)
}
