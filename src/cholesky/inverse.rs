use super::*;

impl<T> AdaptiveCholesky<T>
where
    T: FloatT,
{
    /// Returns the explicit inverse `A^{-1} = L^{-T} L^{-1}` of the current
    /// system matrix as a new symmetric matrix.  The factor is not modified.
    pub fn compute_inverse(&self) -> Result<Matrix<T>, CholeskyError> {
        self.check_decomposed("compute_inverse called before decompose")?;
        let mut Ainv = Matrix::zeros(self.lhs.size());
        self.engine.invert(&self.lhs, &mut Ainv)?;
        Ok(Ainv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_inverse() {
        let A: Matrix<f64> = Matrix::from(&[
            [4., 2., 2.], //
            [2., 5., 1.], //
            [2., 1., 6.],
        ]);
        let mut chol = AdaptiveCholesky::with_matrix(&A, CholeskySettings::default()).unwrap();
        assert!(matches!(
            chol.compute_inverse(),
            Err(CholeskyError::ConstructionOrder(_))
        ));
        chol.decompose().unwrap();
        let L = chol.factor().clone();

        let Ainv: Matrix<f64> = chol.compute_inverse().unwrap();
        let mut I = Matrix::zeros((3, 3));
        I.mul(&A, &Ainv, 1.0, 0.0);
        assert!(I.data().norm_inf_diff(Matrix::identity(3).data()) < 1e-14);

        // symmetric, and the factor is untouched
        for i in 0..3 {
            for j in 0..3 {
                assert!((Ainv[(i, j)] - Ainv[(j, i)]).abs() < 1e-15);
            }
        }
        assert_eq!(chol.factor(), &L);
    }
}
