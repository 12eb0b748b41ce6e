use super::*;

impl<T> AdaptiveCholesky<T>
where
    T: FloatT,
{
    /// Extends a factor of logical size `size` by one point.
    ///
    /// `a` holds the new row of the system matrix restricted to the first
    /// `size + 1` points, with the diagonal entry last.  The factor buffer
    /// must already have room for at least `size + 1` rows.  On return row
    /// `size` of the factor holds the new point and column `size` is zero
    /// above the diagonal.
    pub fn insert_point(&mut self, a: &[T], size: usize) -> Result<(), CholeskyError> {
        self.check_decomposed("insert_point called before decompose")?;
        if a.len() != size + 1 {
            return Err(CholeskyError::IncompatibleDimension {
                expected: size + 1,
                found: a.len(),
            });
        }
        if self.lhs.nrows() < size + 1 {
            return Err(CholeskyError::IncompatibleDimension {
                expected: size + 1,
                found: self.lhs.nrows(),
            });
        }

        // solve L_k c = a[0..k]
        let (head, diag) = a.split_at(size);
        let mut c = head.to_vec();
        forward_substitute(&self.lhs, &mut c)?;

        // also catches NaN
        let φ = diag[0] - c.sumsq();
        if !(φ > T::zero()) {
            return Err(CholeskyError::NumericalFailure { pivot: size });
        }

        let L = &mut self.lhs;
        L.col_slice_mut(size).set(T::zero());
        for (j, &cj) in c.iter().enumerate() {
            L[(size, j)] = cj;
        }
        L[(size, size)] = φ.sqrt();
        for j in (size + 1)..L.ncols() {
            L[(size, j)] = T::zero();
        }
        Ok(())
    }

    /// Grows the factor by one row and column and inserts the point whose
    /// system matrix row is `a`, with `a.len()` equal to the new size.
    pub fn append_point(&mut self, a: &[T]) -> Result<(), CholeskyError> {
        self.check_decomposed("append_point called before decompose")?;
        let n = self.lhs.nrows();
        if a.len() != n + 1 {
            return Err(CholeskyError::IncompatibleDimension {
                expected: n + 1,
                found: a.len(),
            });
        }
        self.lhs.resize_square(n + 1);
        let result = self.insert_point(a, n);
        if result.is_err() {
            self.lhs.resize_square(n);
        }
        result
    }
}
