use super::*;

impl<T> AdaptiveCholesky<T>
where
    T: FloatT,
{
    /// Solves `Ax = b` in place using the current factor
    pub fn solve(&self, b: &mut [T]) -> Result<(), CholeskyError> {
        self.check_decomposed("solve called before decompose")?;
        let n = self.size();
        if b.len() != n {
            return Err(CholeskyError::IncompatibleDimension {
                expected: n,
                found: b.len(),
            });
        }
        forward_substitute(&self.lhs, b)?;
        back_substitute_transpose(&self.lhs, b)?;
        Ok(())
    }

    /// Natural logarithm of `det(A) = prod(L_ii)^2`
    pub fn logdet(&self) -> Result<T, CholeskyError> {
        self.check_decomposed("logdet called before decompose")?;
        let two: T = (2.0).as_T();
        let sum = (0..self.size()).fold(T::zero(), |acc, i| acc + self.lhs[(i, i)].ln());
        Ok(two * sum)
    }

    /// Returns `LL^T`, i.e. the system matrix currently represented by the
    /// factor
    pub fn reconstruct(&self) -> Result<Matrix<T>, CholeskyError> {
        self.check_decomposed("reconstruct called before decompose")?;
        let L = &self.lhs;
        let mut A = Matrix::zeros(L.size());
        A.mul(L, &L.t(), T::one(), T::zero());
        Ok(A)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decomposed_3x3() -> (Matrix<f64>, AdaptiveCholesky<f64>) {
        let A = Matrix::from(&[
            [4., 2., 2.], //
            [2., 5., 1.], //
            [2., 1., 6.],
        ]);
        let mut chol = AdaptiveCholesky::with_matrix(&A, CholeskySettings::default()).unwrap();
        chol.decompose().unwrap();
        (A, chol)
    }

    #[test]
    fn test_solve() {
        let (_, chol) = decomposed_3x3();

        // A * [1,-1,2] = [6,-1,13]
        let mut b = vec![6., -1., 13.];
        chol.solve(&mut b).unwrap();
        assert!(b.norm_inf_diff(&[1., -1., 2.]) < 1e-14);

        let mut b = vec![1., 2.];
        assert!(matches!(
            chol.solve(&mut b),
            Err(CholeskyError::IncompatibleDimension { .. })
        ));
    }

    #[test]
    fn test_logdet_and_reconstruct() {
        let (A, chol) = decomposed_3x3();

        // det(A) = (2*2*sqrt(5))^2 = 80
        assert!((chol.logdet().unwrap() - f64::ln(80.)).abs() < 1e-14);

        let B = chol.reconstruct().unwrap();
        assert!(B.data().norm_inf_diff(A.data()) < 1e-14);
    }
}
