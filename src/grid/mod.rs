//! Grid collaborators supplying the rows and columns of the system matrix.
//!
//! The factorization never owns the grid.  It only asks for the current
//! number of points and for the overlap columns of the most recently added
//! points through the [`OverlapProvider`] trait.

use crate::algebra::*;

mod levelindex;
pub use levelindex::*;

/// Source of system matrix columns for an adaptive set of points.
///
/// Points are numbered `0..size()` in their current order.  After an
/// adaptivity step the retained points keep their relative order and the
/// newly created points are appended at the end.
pub trait OverlapProvider<T>
where
    T: FloatT,
{
    /// Current number of points
    fn size(&self) -> usize;

    /// Returns the `size() x new_points` block of the system matrix `M + λI`
    /// whose columns belong to the last `new_points` points.
    fn overlap_columns(&self, new_points: usize, λ: T) -> Matrix<T>;
}
