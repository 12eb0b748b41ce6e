#![allow(non_snake_case)]

mod common;
use adaptchol::{algebra::*, cholesky::*};
use common::*;
use rand::prelude::*;

#[test]
fn test_decompose_round_trip() {
    let mut rng = StdRng::seed_from_u64(0);

    for n in 1..=50 {
        let A = random_spd(n, &mut rng);
        let chol = decomposed(&A);
        let L = chol.factor();

        assert_eq!(L.size(), (n, n));
        assert!(L.is_tril());
        assert!((0..n).all(|i| L[(i, i)] > 0.));
        assert!(max_abs_diff(&chol.reconstruct().unwrap(), &A) < 1e-9);
    }
}

#[test]
fn test_decompose_scenario() {
    let A = Matrix::from(&[
        [4., 2., 2.], //
        [2., 5., 1.], //
        [2., 1., 6.],
    ]);
    let chol = decomposed(&A);
    let L = chol.factor();

    assert_eq!(L[(0, 0)], 2.);
    assert_eq!(L[(1, 0)], 1.);
    assert_eq!(L[(1, 1)], 2.);
    assert_eq!(L[(2, 0)], 1.);
    assert_eq!(L[(2, 1)], 0.);
    assert!((L[(2, 2)] - f64::sqrt(5.)).abs() < 1e-14);
    assert!(max_abs_diff(&chol.reconstruct().unwrap(), &A) < 1e-9);
}

#[test]
fn test_decompose_reads_lower_triangle() {
    let mut rng = StdRng::seed_from_u64(1);
    let A = random_spd(8, &mut rng);

    let mut B = A.clone();
    for j in 1..8 {
        for i in 0..j {
            B[(i, j)] = -100.;
        }
    }
    let chol = decomposed(&B);
    assert!(max_abs_diff(&chol.reconstruct().unwrap(), &A) < 1e-9);
}

#[test]
fn test_decompose_not_positive_definite() {
    let A = Matrix::from(&[
        [2., 1., 0.], //
        [1., -3., 0.], //
        [0., 0., 1.],
    ]);
    let mut chol = AdaptiveCholesky::with_matrix(&A, CholeskySettings::default()).unwrap();
    assert_eq!(
        chol.decompose(),
        Err(CholeskyError::NumericalFailure { pivot: 1 })
    );

    let mut A = Matrix::identity(3);
    A[(2, 2)] = f64::NAN;
    let mut chol = AdaptiveCholesky::with_matrix(&A, CholeskySettings::default()).unwrap();
    assert_eq!(
        chol.decompose(),
        Err(CholeskyError::NumericalFailure { pivot: 2 })
    );
}

#[test]
fn test_decompose_idempotent() {
    let mut rng = StdRng::seed_from_u64(2);
    let A = random_spd(6, &mut rng);
    let mut chol = decomposed(&A);
    let L = chol.factor().clone();

    chol.decompose().unwrap();
    assert_eq!(chol.factor(), &L);
}

#[test]
fn test_operations_before_decompose() {
    let mut rng = StdRng::seed_from_u64(3);
    let A = random_spd(4, &mut rng);

    let mut chol = AdaptiveCholesky::<f64>::new(CholeskySettings::default()).unwrap();
    assert!(!chol.is_constructed());
    assert!(matches!(
        chol.decompose(),
        Err(CholeskyError::ConstructionOrder(_))
    ));

    chol.set_matrix(&A).unwrap();
    assert!(matches!(
        chol.append_point(&[1., 0., 0., 0., 5.]),
        Err(CholeskyError::ConstructionOrder(_))
    ));
    assert!(matches!(
        chol.permute(0, 2, CircularShift::Left),
        Err(CholeskyError::ConstructionOrder(_))
    ));
    assert!(matches!(
        chol.compute_inverse(),
        Err(CholeskyError::ConstructionOrder(_))
    ));
    assert!(matches!(
        chol.logdet(),
        Err(CholeskyError::ConstructionOrder(_))
    ));
}

#[test]
fn test_build_from_grid() {
    use adaptchol::grid::*;

    let grid = LevelIndexGrid::regular(3, 3);
    let λ = 1e-3;

    let mut chol = AdaptiveCholesky::new(CholeskySettings::default()).unwrap();
    chol.build_matrix(&grid, λ).unwrap();
    chol.decompose().unwrap();

    let A = grid.system_matrix(λ);
    assert_eq!(chol.size(), grid.len());
    assert!(max_abs_diff(&chol.reconstruct().unwrap(), &A) < 1e-12);

    // solve against the reconstructed matrix
    let x: Vec<f64> = (0..grid.len()).map(|i| (i as f64).sin()).collect();
    let mut b = vec![0.; grid.len()];
    for i in 0..grid.len() {
        b[i] = (0..grid.len()).map(|j| A[(i, j)] * x[j]).sum();
    }
    chol.solve(&mut b).unwrap();
    assert!(b.norm_inf_diff(&x) < 1e-8);
}
