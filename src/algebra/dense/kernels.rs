#![allow(non_snake_case)]

// Triangular kernels shared by the factorization, insertion, reordering
// and repair steps.  Unless stated otherwise each kernel operates on the
// leading `n x n` block of a square column major buffer, so that callers
// may keep spare capacity in trailing rows and columns.

use crate::algebra::{DenseFactorizationError, FloatT, Matrix, ShapedMatrix, VectorMath};
use itertools::izip;
use std::ops::Range;

/// In-place Cholesky factorization `A = LL^T` of the full matrix.  Only the
/// lower triangle of `A` is referenced, and the strict upper triangle is
/// zeroed on success.
pub(crate) fn cholesky_in_place<T: FloatT>(A: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
    if !A.is_square() {
        return Err(DenseFactorizationError::IncompatibleDimension);
    }
    let n = A.nrows();

    for j in 0..n {
        let mut d = A[(j, j)];
        for k in 0..j {
            d -= A[(j, k)] * A[(j, k)];
        }
        // also catches NaN
        if !(d > T::zero()) {
            return Err(DenseFactorizationError::Cholesky((j + 1) as i32));
        }
        let ljj = d.sqrt();
        A[(j, j)] = ljj;

        for i in (j + 1)..n {
            let mut v = A[(i, j)];
            for k in 0..j {
                v -= A[(i, k)] * A[(j, k)];
            }
            A[(i, j)] = v / ljj;
        }
    }
    A.zero_triu();
    Ok(())
}

/// Solves `L[0..n,0..n] x = b` in place, with `n = b.len()`.
pub(crate) fn forward_substitute<T: FloatT>(
    L: &Matrix<T>,
    b: &mut [T],
) -> Result<(), DenseFactorizationError> {
    let n = b.len();
    if n > L.nrows() || n > L.ncols() {
        return Err(DenseFactorizationError::IncompatibleDimension);
    }

    for j in 0..n {
        let ljj = L[(j, j)];
        if !(ljj > T::zero()) {
            return Err(DenseFactorizationError::Cholesky((j + 1) as i32));
        }
        b[j] /= ljj;
        let bj = b[j];
        let col = &L.col_slice(j)[(j + 1)..n];
        for (bi, &lij) in izip!(&mut b[(j + 1)..n], col) {
            *bi -= lij * bj;
        }
    }
    Ok(())
}

/// Solves `L[0..n,0..n]^T x = b` in place, with `n = b.len()`.
pub(crate) fn back_substitute_transpose<T: FloatT>(
    L: &Matrix<T>,
    b: &mut [T],
) -> Result<(), DenseFactorizationError> {
    let n = b.len();
    if n > L.nrows() || n > L.ncols() {
        return Err(DenseFactorizationError::IncompatibleDimension);
    }

    for j in (0..n).rev() {
        let ljj = L[(j, j)];
        if !(ljj > T::zero()) {
            return Err(DenseFactorizationError::Cholesky((j + 1) as i32));
        }
        let (head, tail) = b.split_at_mut(j + 1);
        let col = &L.col_slice(j)[(j + 1)..n];
        head[j] = (head[j] - col.dot(tail)) / ljj;
    }
    Ok(())
}

/// A plane (Givens) rotation `[c s; -s c]` acting on a pair of columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlaneRotation<T> {
    pub c: T,
    pub s: T,
}

impl<T: FloatT> PlaneRotation<T> {
    /// Builds the rotation mapping the row pair `(a, b)` onto `(r, 0)`
    /// with `r = hypot(a,b) >= 0`.  Returns the rotation and `r`.
    pub(crate) fn new(a: T, b: T) -> (Self, T) {
        let r = a.hypot(b);
        if r == T::zero() {
            let rot = Self {
                c: T::one(),
                s: T::zero(),
            };
            return (rot, r);
        }
        (Self { c: a / r, s: b / r }, r)
    }

    /// Applies the rotation from the right to columns `p < q` of `L`,
    /// restricted to the given rows.
    pub(crate) fn apply_to_columns(&self, L: &mut Matrix<T>, p: usize, q: usize, rows: Range<usize>) {
        let (colp, colq) = column_pair_mut(L, p, q);
        for (x, y) in izip!(&mut colp[rows.clone()], &mut colq[rows]) {
            let (xv, yv) = (*x, *y);
            *x = self.c * xv + self.s * yv;
            *y = self.c * yv - self.s * xv;
        }
    }
}

// mutable views of two distinct columns p < q
fn column_pair_mut<T: FloatT>(L: &mut Matrix<T>, p: usize, q: usize) -> (&mut [T], &mut [T]) {
    assert!(p < q && q < L.ncols());
    let m = L.nrows();
    let (left, right) = L.data_mut().split_at_mut(q * m);
    (&mut left[(p * m)..((p + 1) * m)], &mut right[..m])
}

/// Rank one update of a full Cholesky factor, i.e. overwrites `L` with
/// the factor of `LL^T + xx^T`.  `x` is used as workspace and is
/// overwritten.
pub(crate) fn rank_one_update<T: FloatT>(
    L: &mut Matrix<T>,
    x: &mut [T],
) -> Result<(), DenseFactorizationError> {
    let n = L.nrows();
    if !L.is_square() || x.len() != n {
        return Err(DenseFactorizationError::IncompatibleDimension);
    }

    for k in 0..n {
        let lkk = L[(k, k)];
        if !(lkk > T::zero()) {
            return Err(DenseFactorizationError::Cholesky((k + 1) as i32));
        }
        let (rot, r) = PlaneRotation::new(lkk, x[k]);
        L[(k, k)] = r;

        // rot.c = lkk/r and rot.s = x[k]/r.  The classical update
        // uses c' = r/lkk and s' = x[k]/lkk, i.e. c' = 1/rot.c
        // and s' = rot.s/rot.c
        let (cinv, sdivc) = (rot.c.recip(), rot.s / rot.c);
        let col = &mut L.col_slice_mut(k)[(k + 1)..n];
        for (lik, xi) in izip!(col, &mut x[(k + 1)..n]) {
            *lik = (*lik + sdivc * *xi) * rot.c;
            *xi = cinv * *xi - sdivc * *lik;
        }
    }
    Ok(())
}

/// Writes the inverse of the lower triangular matrix `L` into `X`.
pub(crate) fn invert_lower_triangular<T: FloatT>(
    L: &Matrix<T>,
    X: &mut Matrix<T>,
) -> Result<(), DenseFactorizationError> {
    let n = L.nrows();
    if !L.is_square() || X.size() != L.size() {
        return Err(DenseFactorizationError::IncompatibleDimension);
    }
    X.data_mut().set(T::zero());

    for j in 0..n {
        if L[(j, j)] == T::zero() {
            return Err(DenseFactorizationError::Inverse((j + 1) as i32));
        }
        X[(j, j)] = L[(j, j)].recip();
        for i in (j + 1)..n {
            let mut acc = T::zero();
            for k in j..i {
                acc += L[(i, k)] * X[(k, j)];
            }
            X[(i, j)] = -acc / L[(i, i)];
        }
    }
    Ok(())
}
