use super::*;

/// Direction of a circular shift of the index block `k..=l`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircularShift {
    /// The point at `l` moves to `k` and the points `k..l` move up by one
    Right,
    /// The point at `k` moves to `l` and the points `k+1..=l` move down by one
    Left,
}

impl<T> AdaptiveCholesky<T>
where
    T: FloatT,
{
    /// Reorders the factor so that it becomes the Cholesky factor of the
    /// system matrix with its rows and columns `k..=l` circularly shifted.
    /// No permutation is stored; the row exchanges are compensated by plane
    /// rotations of neighbouring columns.
    pub fn permute(&mut self, k: usize, l: usize, shift: CircularShift) -> Result<(), CholeskyError> {
        self.check_decomposed("permute called before decompose")?;
        let n = self.lhs.nrows();
        if k > l || l >= n {
            return Err(CholeskyError::InvalidRange { k, l, n });
        }
        if k == l {
            return Ok(());
        }

        match shift {
            CircularShift::Left => shift_left(&mut self.lhs, k, l),
            CircularShift::Right => shift_right(&mut self.lhs, k, l),
        }
        fix_diagonal_signs(&mut self.lhs, k, l);
        Ok(())
    }
}

// row k moves down to l.  Rows k..l then carry one entry right of the
// diagonal, removed from top to bottom.
fn shift_left<T: FloatT>(L: &mut Matrix<T>, k: usize, l: usize) {
    let n = L.nrows();
    for i in k..l {
        L.swap_rows(i, i + 1);
    }
    for i in k..l {
        let (rot, _) = PlaneRotation::new(L[(i, i)], L[(i, i + 1)]);
        rot.apply_to_columns(L, i, i + 1, i..n);
        L[(i, i + 1)] = T::zero();
    }
}

// row l moves up to k.  Row k then carries entries in columns k+1..=l,
// removed from right to left.
fn shift_right<T: FloatT>(L: &mut Matrix<T>, k: usize, l: usize) {
    let n = L.nrows();
    for i in ((k + 1)..=l).rev() {
        L.swap_rows(i, i - 1);
    }
    for j in (k..l).rev() {
        let (rot, _) = PlaneRotation::new(L[(k, j)], L[(k, j + 1)]);
        rot.apply_to_columns(L, j, j + 1, k..n);
        L[(k, j + 1)] = T::zero();
    }
}

// Negating a column leaves LL^T unchanged, so this restores the unique
// factor with positive diagonal.
fn fix_diagonal_signs<T: FloatT>(L: &mut Matrix<T>, k: usize, l: usize) {
    for j in k..=l {
        if L[(j, j)] < T::zero() {
            L.col_slice_mut(j)[j..].negate();
        }
    }
}
