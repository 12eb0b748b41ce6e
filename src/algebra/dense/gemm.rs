#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, FloatT, Matrix, MultiplyGEMM, ShapedMatrix};

impl<T> MultiplyGEMM for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    // implements self = C = αA*B + βC
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T = T>,
        MATB: DenseMatrix<T = T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());

        if self.nrows() == 0 || self.ncols() == 0 {
            return self;
        }

        let (Adata, Bdata) = (A.data(), B.data());

        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                let mut acc = T::zero();
                for k in 0..A.ncols() {
                    acc += Adata[A.index_linear((i, k))] * Bdata[B.index_linear((k, j))];
                }
                let c = &mut self[(i, j)];
                *c = α * acc + β * (*c);
            }
        }
        self
    }
}

#[test]
fn test_gemm() {
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.],
    ]);
    let B = Matrix::from(&[
        [1., 2., 3., 4.], //
        [5., 6., 7., 8.],
        [9., 10., 11., 12.],
    ]);
    let mut C = Matrix::from(&[
        [2., 6., 0., 4.], //
        [7., 2., 7., 2.],
    ]);

    C.mul(&A, &B, 1.0, 1.0);

    let Cexp = Matrix::from(&[
        [40., 50., 50., 60.], //
        [90., 100., 120., 130.],
    ]);
    assert_eq!(C, Cexp);
}

#[test]
fn test_gemm_adjoint() {
    let A = Matrix::from(&[
        [1., 0.], //
        [2., 3.],
    ]);
    let mut M = Matrix::zeros((2, 2));
    M.mul(&A, &A.t(), 1.0, 0.0);

    let Mexp = Matrix::from(&[
        [1., 2.], //
        [2., 13.],
    ]);
    assert_eq!(M, Mexp);
}
