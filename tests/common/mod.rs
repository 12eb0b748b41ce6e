#![allow(non_snake_case)]
#![allow(dead_code)]

use adaptchol::{algebra::*, cholesky::*, grid::*};
use rand::prelude::*;

/// A = BB^T + nI with B uniform in [-1,1]
pub fn random_spd(n: usize, rng: &mut StdRng) -> Matrix<f64> {
    let mut B = Matrix::zeros((n, n));
    for v in B.data_mut() {
        *v = rng.gen_range(-1.0..1.0);
    }
    let mut A = Matrix::identity(n);
    A.mul(&B, &B.t(), 1.0, n as f64);
    A
}

/// The principal submatrix of A for the given points, in the given order
pub fn principal(A: &Matrix<f64>, points: &[usize]) -> Matrix<f64> {
    let n = points.len();
    let mut B = Matrix::zeros((n, n));
    for (i, &pi) in points.iter().enumerate() {
        for (j, &pj) in points.iter().enumerate() {
            B[(i, j)] = A[(pi, pj)];
        }
    }
    B
}

pub fn decomposed(A: &Matrix<f64>) -> AdaptiveCholesky<f64> {
    let mut chol = AdaptiveCholesky::with_matrix(A, CholeskySettings::default()).unwrap();
    chol.decompose().unwrap();
    chol
}

pub fn max_abs_diff(A: &Matrix<f64>, B: &Matrix<f64>) -> f64 {
    assert_eq!(A.size(), B.size());
    A.data().norm_inf_diff(B.data())
}

/// A grid whose system matrix is a fixed dense matrix, holding a subset
/// of its points in a given order
pub struct DenseGrid {
    pub A: Matrix<f64>,
    pub points: Vec<usize>,
}

impl DenseGrid {
    pub fn system_matrix(&self) -> Matrix<f64> {
        principal(&self.A, &self.points)
    }
}

impl OverlapProvider<f64> for DenseGrid {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn overlap_columns(&self, new_points: usize, λ: f64) -> Matrix<f64> {
        let n = self.points.len();
        let mut cols = Matrix::zeros((n, new_points));
        for jj in 0..new_points {
            let j = n - new_points + jj;
            for i in 0..n {
                cols[(i, jj)] = self.A[(self.points[i], self.points[j])];
            }
            cols[(j, jj)] += λ;
        }
        cols
    }
}
