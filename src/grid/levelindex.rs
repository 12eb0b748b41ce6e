use super::OverlapProvider;
use crate::algebra::*;
use thiserror::Error;

/// Error type returned when editing a [`LevelIndexGrid`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Point has dimension {found}, grid has dimension {expected}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Invalid hat function (level {level}, index {index})")]
    InvalidPoint { level: u32, index: u32 },
    #[error("Point position {0} out of range")]
    OutOfRange(usize),
}

/// A set of hierarchical hat basis functions on the unit cube.
///
/// Each point holds one `(level, index)` pair per dimension and represents
/// the tensor product of the one dimensional hat functions centred at
/// `index / 2^level` with support width `2 / 2^level`.  Levels start at 1
/// and indices are odd with `0 < index < 2^level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelIndexGrid {
    dim: usize,
    // point-major storage, `dim` entries per point
    levels: Vec<u32>,
    indices: Vec<u32>,
}

impl LevelIndexGrid {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            levels: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Full grid of all hat functions with level at most `level` in each
    /// direction, restricted to total level sum `dim + level - 1`.
    pub fn regular(dim: usize, level: u32) -> Self {
        let mut grid = Self::new(dim);
        if dim == 0 || level == 0 {
            return grid;
        }
        let mut levels = vec![1_u32; dim];
        let max_sum = dim as u32 + level - 1;
        loop {
            if levels.iter().sum::<u32>() <= max_sum {
                grid.push_all_indices(&levels);
            }
            // next multi-level in lexicographic order
            let mut d = 0;
            loop {
                if d == dim {
                    return grid;
                }
                levels[d] += 1;
                if levels[d] <= level {
                    break;
                }
                levels[d] = 1;
                d += 1;
            }
        }
    }

    fn push_all_indices(&mut self, levels: &[u32]) {
        let mut indices = vec![1_u32; self.dim];
        loop {
            self.levels.extend_from_slice(levels);
            self.indices.extend_from_slice(&indices);
            let mut d = 0;
            loop {
                if d == self.dim {
                    return;
                }
                indices[d] += 2;
                if indices[d] < (1 << levels[d]) {
                    break;
                }
                indices[d] = 1;
                d += 1;
            }
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.levels.len() / self.dim
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Levels of the point at position `i`
    pub fn levels(&self, i: usize) -> &[u32] {
        &self.levels[(i * self.dim)..((i + 1) * self.dim)]
    }

    /// Indices of the point at position `i`
    pub fn indices(&self, i: usize) -> &[u32] {
        &self.indices[(i * self.dim)..((i + 1) * self.dim)]
    }

    /// Appends a point at the end of the grid
    pub fn push_point(&mut self, levels: &[u32], indices: &[u32]) -> Result<(), GridError> {
        for found in [levels.len(), indices.len()] {
            if found != self.dim {
                return Err(GridError::DimensionMismatch {
                    expected: self.dim,
                    found,
                });
            }
        }
        for (&level, &index) in levels.iter().zip(indices) {
            let valid = (1..32).contains(&level) && index % 2 == 1 && index < (1 << level);
            if !valid {
                return Err(GridError::InvalidPoint { level, index });
            }
        }
        self.levels.extend_from_slice(levels);
        self.indices.extend_from_slice(indices);
        Ok(())
    }

    /// Removes the points at the given positions.  The remaining points
    /// keep their relative order.
    pub fn remove_points(&mut self, positions: &[usize]) -> Result<(), GridError> {
        let n = self.len();
        let mut keep = vec![true; n];
        for &p in positions {
            if p >= n {
                return Err(GridError::OutOfRange(p));
            }
            keep[p] = false;
        }
        let dim = self.dim;
        let mut it = keep.iter().flat_map(|&k| std::iter::repeat(k).take(dim));
        self.levels.retain(|_| it.next().unwrap_or(false));
        let mut it = keep.iter().flat_map(|&k| std::iter::repeat(k).take(dim));
        self.indices.retain(|_| it.next().unwrap_or(false));
        Ok(())
    }

    /// L2 inner product of the basis functions at positions `i` and `j`
    pub fn l2_product<T: FloatT>(&self, i: usize, j: usize) -> T {
        let mut res = T::one();
        for d in 0..self.dim {
            let (l1, i1) = (self.levels(i)[d], self.indices(i)[d]);
            let (l2, i2) = (self.levels(j)[d], self.indices(j)[d]);
            res *= hat_product_1d::<T>(l1, i1, l2, i2);
            if res == T::zero() {
                break;
            }
        }
        res
    }

    /// The full system matrix `M + λI`
    pub fn system_matrix<T: FloatT>(&self, λ: T) -> Matrix<T> {
        self.overlap_columns(self.len(), λ)
    }
}

// integral over [0,1] of the product of two 1D hat functions
fn hat_product_1d<T: FloatT>(l1: u32, i1: u32, l2: u32, i2: u32) -> T {
    let h1: T = (1_u64 << l1).as_T();
    let h2: T = (1_u64 << l2).as_T();
    let (i1, i2): (T, T) = (i1.as_T(), i2.as_T());

    if l1 == l2 {
        if i1 == i2 {
            let (two, three): (T, T) = ((2.0).as_T(), (3.0).as_T());
            return two / (three * h1);
        }
        return T::zero();
    }

    // disjoint supports
    let lower = T::max((i1 - T::one()) / h1, (i2 - T::one()) / h2);
    let upper = T::min((i1 + T::one()) / h1, (i2 + T::one()) / h2);
    if lower >= upper {
        return T::zero();
    }

    // the finer function is linear on the support of the coarser one
    let (hf, xf, hc, xc) = if l1 > l2 {
        (h1, i1 / h1, h2, i2 / h2)
    } else {
        (h2, i2 / h2, h1, i1 / h1)
    };
    let diff = xf - xc;
    let hinv = hf.recip();
    let temp = ((diff - hinv).abs() + (diff + hinv).abs() - diff.abs()) * hc;
    (T::one() - temp) / hf
}

impl<T> OverlapProvider<T> for LevelIndexGrid
where
    T: FloatT,
{
    fn size(&self) -> usize {
        self.len()
    }

    fn overlap_columns(&self, new_points: usize, λ: T) -> Matrix<T> {
        let n = self.len();
        let m = usize::min(new_points, n);
        let mut cols = Matrix::zeros((n, m));
        for jj in 0..m {
            let j = n - m + jj;
            for i in 0..n {
                cols[(i, jj)] = self.l2_product(i, j);
            }
            cols[(j, jj)] += λ;
        }
        cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hat_product_1d() {
        // same function: 2/(3*2^l)
        let v: f64 = hat_product_1d(1, 1, 1, 1);
        assert!((v - 1. / 3.).abs() < 1e-15);
        let v: f64 = hat_product_1d(3, 5, 3, 5);
        assert!((v - 1. / 12.).abs() < 1e-15);

        // neighbours on the same level only touch
        let v: f64 = hat_product_1d(2, 1, 2, 3);
        assert_eq!(v, 0.);

        // nested supports, symmetric in its arguments
        let v: f64 = hat_product_1d(1, 1, 2, 1);
        assert!((v - 0.125).abs() < 1e-15);
        let v: f64 = hat_product_1d(2, 1, 1, 1);
        assert!((v - 0.125).abs() < 1e-15);

        // [0.5,1.0] vs [0,0.25]
        let v: f64 = hat_product_1d(2, 3, 3, 1);
        assert_eq!(v, 0.);
    }

    #[test]
    fn test_regular_grid() {
        let grid = LevelIndexGrid::regular(1, 3);
        assert_eq!(grid.len(), 7);

        // levels (1,1), (1,2), (2,1)
        let grid = LevelIndexGrid::regular(2, 2);
        assert_eq!(grid.len(), 5);
        assert!((0..grid.len()).all(|i| grid.levels(i).iter().sum::<u32>() <= 3));
    }

    #[test]
    fn test_push_and_remove() {
        let mut grid = LevelIndexGrid::new(2);
        grid.push_point(&[1, 1], &[1, 1]).unwrap();
        grid.push_point(&[2, 1], &[3, 1]).unwrap();
        grid.push_point(&[1, 2], &[1, 1]).unwrap();

        assert_eq!(
            grid.push_point(&[1], &[1]),
            Err(GridError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            grid.push_point(&[2, 1], &[2, 1]),
            Err(GridError::InvalidPoint { level: 2, index: 2 })
        );

        grid.remove_points(&[1]).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.levels(1), &[1, 2]);
        assert_eq!(grid.remove_points(&[2]), Err(GridError::OutOfRange(2)));
    }

    #[test]
    fn test_overlap_columns() {
        let grid = LevelIndexGrid::regular(2, 3);
        let λ = 0.01;
        let A: Matrix<f64> = grid.system_matrix(λ);
        let n = grid.len();

        // symmetric with λ on the diagonal
        for i in 0..n {
            for j in 0..n {
                assert_eq!(A[(i, j)], A[(j, i)]);
            }
            assert!((A[(i, i)] - grid.l2_product::<f64>(i, i) - λ).abs() < 1e-15);
        }

        // trailing columns agree with the full matrix
        let cols = grid.overlap_columns(3, λ);
        assert_eq!(cols.size(), (n, 3));
        assert_eq!(cols, A.submatrix(0..n, (n - 3)..n));
    }
}
