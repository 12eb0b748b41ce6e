use crate::algebra::{
    Adjoint, DenseMatrix, FloatT, Matrix, MatrixShape, ShapedMatrix, VectorMath,
};
use std::ops::{Index, IndexMut, Range};

impl<T> DenseMatrix for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> DenseMatrix for Adjoint<'_, Matrix<T>>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        //reverse the indices
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        &self.src.data
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data_mut().set(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    /// Copies all values from a matrix of identical size
    pub fn copy_from(&mut self, src: &Matrix<T>) -> &mut Self {
        assert_eq!(self.size(), src.size());
        self.data.copy_from_slice(&src.data);
        self
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    pub fn col_slice(&self, col: usize) -> &[T] {
        assert!(col < self.n);
        &self.data[(col * self.m)..(col + 1) * self.m]
    }

    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        assert!(col < self.n);
        &mut self.data[(col * self.m)..(col + 1) * self.m]
    }

    /// Copies row `row` into `out`
    pub fn row(&self, row: usize, out: &mut [T]) {
        assert!(row < self.m && out.len() == self.n);
        for (j, v) in out.iter_mut().enumerate() {
            *v = self[(row, j)];
        }
    }

    pub fn set_row(&mut self, row: usize, src: &[T]) {
        assert!(row < self.m && src.len() == self.n);
        for (j, &v) in src.iter().enumerate() {
            self[(row, j)] = v;
        }
    }

    pub fn set_col(&mut self, col: usize, src: &[T]) {
        self.col_slice_mut(col).copy_from(src);
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        assert!(i < self.m && j < self.m);
        if i == j {
            return;
        }
        let m = self.m;
        for col in self.data.chunks_exact_mut(m) {
            col.swap(i, j);
        }
    }

    /// Resizes to an `n x n` matrix.  The leading block common to the old
    /// and new sizes is preserved and any new entries are zero.
    pub fn resize_square(&mut self, n: usize) {
        if self.size() == (n, n) {
            return;
        }
        let rows = usize::min(self.m, n);
        let cols = usize::min(self.n, n);
        let mut data = vec![T::zero(); n * n];
        for j in 0..cols {
            data[(j * n)..(j * n + rows)].copy_from_slice(&self.col_slice(j)[..rows]);
        }
        self.m = n;
        self.n = n;
        self.data = data;
    }

    /// Returns a copy of the block `self[rows, cols]`
    pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> Matrix<T> {
        assert!(rows.start <= rows.end && rows.end <= self.m);
        assert!(cols.start <= cols.end && cols.end <= self.n);
        let mut out = Matrix::zeros((rows.len(), cols.len()));
        for (jout, j) in cols.enumerate() {
            out.col_slice_mut(jout)
                .copy_from(&self.col_slice(j)[rows.clone()]);
        }
        out
    }

    /// Replaces `self` with its block `self[rows, cols]`
    pub fn resize_to_submatrix(&mut self, rows: Range<usize>, cols: Range<usize>) {
        *self = self.submatrix(rows, cols);
    }

    /// true if there are no nonzeros strictly above the diagonal
    pub fn is_tril(&self) -> bool {
        for c in 0..self.ncols() {
            for r in 0..usize::min(c, self.nrows()) {
                if self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// zeros every entry strictly above the diagonal
    pub fn zero_triu(&mut self) {
        let m = self.m;
        for c in 1..self.n {
            let rows = usize::min(c, m);
            self.col_slice_mut(c)[..rows].set(T::zero());
        }
    }

    /// Copies the lower triangle into the upper triangle
    pub fn symmetrize_from_tril(&mut self) {
        assert!(self.is_square());
        for c in 1..self.n {
            for r in 0..c {
                self[(r, c)] = self[(c, r)];
            }
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> Index<(usize, usize)> for Adjoint<'_, Matrix<T>>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

// construct from a row-major array literal
impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut mat = Matrix::zeros((R, C));
        for (i, row) in rows.iter().enumerate() {
            mat.set_row(i, row);
        }
        mat
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

fn display_matrix<M>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseMatrix,
    M::Output: FloatT,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {:?}", m[(i, j)])?;
        }
        writeln!(f, "]")?;
    }
    writeln!(f)?;
    Ok(())
}
