#![cfg_attr(rustfmt, rustfmt_skip)]

// standard imports via blas-lapack-rs crates
extern crate blas_src;
extern crate lapack_src;
use lapack::*;

/// Floating point types with LAPACK Cholesky support.  Implemented for
/// f32 and f64 only.
pub trait LapackFloatT:
    private::LapackFloatSealed
    + XpotrfScalar
    + XpotriScalar
{}

impl LapackFloatT for f32 {}
impl LapackFloatT for f64 {}

mod private {
    pub trait LapackFloatSealed {}
    impl LapackFloatSealed for f32 {}
    impl LapackFloatSealed for f64 {}
}

// --------------------------------------
// ?potrf : Cholesky decomposition
// --------------------------------------

pub trait XpotrfScalar: Sized {
    fn xpotrf(
        uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32
    );
}

macro_rules! impl_lapack_xpotrf{
    ($T:ty, $XPOTRF:path) => {
        impl XpotrfScalar for $T {
            fn xpotrf(
                uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32
            ) {
                unsafe{
                    $XPOTRF(
                        uplo, n, a, lda, info
                    );
                }
            }
        }
    };
}
impl_lapack_xpotrf!(f32, spotrf);
impl_lapack_xpotrf!(f64, dpotrf);

// --------------------------------------
// ?potri : inverse from a Cholesky factor
// --------------------------------------

pub trait XpotriScalar: Sized {
    fn xpotri(
        uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32
    );
}

macro_rules! impl_lapack_xpotri{
    ($T:ty, $XPOTRI:path) => {
        impl XpotriScalar for $T {
            fn xpotri(
                uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32
            ) {
                unsafe{
                    $XPOTRI(
                        uplo, n, a, lda, info
                    );
                }
            }
        }
    };
}
impl_lapack_xpotri!(f32, spotri);
impl_lapack_xpotri!(f64, dpotri);
