#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_4x4() -> Matrix<f64> {
    Matrix::from(&[
        [1., 2., 3., 4.],   //
        [5., 6., 7., 8.],   //
        [9., 10., 11., 12.], //
        [13., 14., 15., 16.],
    ])
}

#[test]
fn test_from_array_is_column_major() {
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.],
    ]);
    assert_eq!(A.size(), (2, 3));
    assert_eq!(A.data(), &[1., 4., 2., 5., 3., 6.]);
    assert_eq!(A[(1, 2)], 6.);
    assert_eq!(A.t()[(2, 1)], 6.);
}

#[test]
fn test_resize_square_shrink_and_grow() {
    let mut A = test_matrix_4x4();
    A.resize_square(2);
    assert_eq!(A, Matrix::from(&[[1., 2.], [5., 6.]]));

    A.resize_square(3);
    assert_eq!(
        A,
        Matrix::from(&[
            [1., 2., 0.], //
            [5., 6., 0.], //
            [0., 0., 0.],
        ])
    );
}

#[test]
fn test_submatrix() {
    let mut A = test_matrix_4x4();
    let B = A.submatrix(1..4, 0..2);
    assert_eq!(B, Matrix::from(&[[5., 6.], [9., 10.], [13., 14.]]));

    A.resize_to_submatrix(2..4, 2..4);
    assert_eq!(A, Matrix::from(&[[11., 12.], [15., 16.]]));

    let E = test_matrix_4x4().submatrix(4..4, 0..0);
    assert_eq!(E.size(), (0, 0));
}

#[test]
fn test_rows_and_columns() {
    let mut A = test_matrix_4x4();
    A.swap_rows(0, 3);
    assert_eq!(A.col_slice(0), &[13., 5., 9., 1.]);

    let mut r = vec![0.; 4];
    A.row(3, &mut r);
    assert_eq!(r, vec![1., 2., 3., 4.]);

    A.set_row(1, &[0., 0., 0., 0.]);
    A.set_col(2, &[-1., -2., -3., -4.]);
    assert_eq!(A[(1, 1)], 0.);
    assert_eq!(A[(1, 2)], -2.);
}

#[test]
fn test_triangle_helpers() {
    let mut A = test_matrix_4x4();
    assert!(!A.is_tril());
    A.zero_triu();
    assert!(A.is_tril());
    assert_eq!(A[(3, 0)], 13.);

    A.symmetrize_from_tril();
    assert_eq!(A[(0, 3)], 13.);
    assert_eq!(A[(1, 2)], 10.);
}

#[test]
fn test_identity_and_copy() {
    let mut A = Matrix::<f64>::zeros((3, 3));
    A.copy_from(&Matrix::identity(3));
    assert_eq!(A.data().sumsq(), 3.);
}
