#![allow(non_snake_case)]

use std::ops::Index;

use crate::algebra::MatrixShape;

/// Dimension queries common to all matrix types
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn shape(&self) -> MatrixShape;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

//NB: the concrete dense type is just called "Matrix".  The "DenseMatrix" trait
//is implemented on Matrix and Adjoint to allow for indexing of values in
//either format.   This follows the Julia naming convention for similar types.
pub trait DenseMatrix: ShapedMatrix + Index<(usize, usize)> {
    type T;
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    fn data(&self) -> &[Self::T];
}

/// General dense matrix-matrix multiply
pub trait MultiplyGEMM {
    type T;
    // implements self = C = αA*B + βC
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: Self::T, β: Self::T) -> &Self
    where
        MATB: DenseMatrix<T = Self::T>,
        MATA: DenseMatrix<T = Self::T>;
}
