// All internal matrix representations are dense and
// stored in column major format.

/// Dense matrix in column major format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [4.  2.  2.]
///     [2.  5.  1.]
///     [2.  1.  6.]
/// ```
///
/// ```no_run
/// use adaptchol::algebra::Matrix;
///
/// let A : Matrix<f64> = Matrix::from(
///      &[[4., 2., 2.],
///        [2., 5., 1.],
///        [2., 1., 6.]]);
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    ///number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}

/// Read only transposed view of a [`Matrix`]
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Matrix shape marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    Triu,
    /// Lower triangular matrix
    Tril,
}

impl MatrixTriangle {
    /// LAPACK `uplo` argument
    #[allow(dead_code)] //used by the lapack backend only
    pub(crate) fn as_blas_char(&self) -> u8 {
        match self {
            MatrixTriangle::Triu => b'U',
            MatrixTriangle::Tril => b'L',
        }
    }
}
