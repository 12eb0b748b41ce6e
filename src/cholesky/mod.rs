//! Incrementally maintained Cholesky factors.
//!
//! An [`AdaptiveCholesky`] holds the lower triangular factor `L` of a
//! symmetric positive definite system matrix `A = LL^T` and keeps it
//! current while points are removed from and appended to an adaptive grid.
//! The factor is computed from scratch only once.  Every later adaptivity
//! step reorders the factor with plane rotations, repairs it with rank one
//! updates and extends it one point at a time.
//!
//! __Example usage__ :
//!
//! ```no_run
//! use adaptchol::cholesky::*;
//! use adaptchol::grid::*;
//!
//! let mut grid = LevelIndexGrid::regular(2, 3);
//! let settings = CholeskySettings::<f64>::default();
//!
//! let mut chol = AdaptiveCholesky::new(settings).unwrap();
//! chol.build_matrix(&grid, 1e-4).unwrap();
//! chol.decompose().unwrap();
//!
//! // drop two points and add one
//! grid.remove_points(&[0, 3]).unwrap();
//! grid.push_point(&[4, 1], &[3, 1]).unwrap();
//! chol.apply_adaptivity_step(&grid, &[0, 3], 1, 1e-4).unwrap();
//! ```

#![allow(non_snake_case)]

use crate::algebra::*;
use crate::grid::OverlapProvider;
use crate::timers::*;

mod decompose;
mod engine;
mod error;
mod insert;
mod inverse;
#[cfg(feature = "serde")]
mod json;
mod modify;
mod permute;
mod settings;
mod solve;

pub(crate) use engine::*;
pub use error::*;
#[cfg(feature = "serde")]
pub use json::*;
pub use permute::CircularShift;
pub use settings::*;

/// Cholesky factor of a symmetric positive definite matrix that can be
/// updated as rows and columns are removed and appended.
#[derive(Debug, Clone)]
pub struct AdaptiveCholesky<T: FloatT = f64> {
    // system matrix before decomposition, lower factor after
    lhs: Matrix<T>,
    is_constructed: bool,
    is_decomposed: bool,
    settings: CholeskySettings<T>,
    engine: DenseBackend<T>,
    timers: Timers,
}

impl<T> AdaptiveCholesky<T>
where
    T: FloatT,
{
    /// Creates an empty factor.  The system matrix must be supplied with
    /// [`set_matrix`](Self::set_matrix) or [`build_matrix`](Self::build_matrix)
    /// before decomposing.
    pub fn new(settings: CholeskySettings<T>) -> Result<Self, CholeskyError> {
        settings.validate()?;
        let engine = DenseBackend::from_name(&settings.dense_backend)?;
        if settings.verbose {
            log::info!("dense backend: {}", engine.name());
        }

        Ok(Self {
            lhs: Matrix::zeros((0, 0)),
            is_constructed: false,
            is_decomposed: false,
            settings,
            engine,
            timers: Timers::default(),
        })
    }

    /// Creates a factor holding the system matrix `A`, not yet decomposed
    pub fn with_matrix(A: &Matrix<T>, settings: CholeskySettings<T>) -> Result<Self, CholeskyError> {
        let mut chol = Self::new(settings)?;
        chol.set_matrix(A)?;
        Ok(chol)
    }

    /// Replaces the system matrix.  Only the lower triangle of `A` is read.
    /// Any previous factor is discarded.
    pub fn set_matrix(&mut self, A: &Matrix<T>) -> Result<(), CholeskyError> {
        if !A.is_square() {
            return Err(CholeskyError::IncompatibleDimension {
                expected: A.nrows(),
                found: A.ncols(),
            });
        }
        self.lhs = A.clone();
        self.is_constructed = true;
        self.is_decomposed = false;
        Ok(())
    }

    /// Populates the system matrix `M + λI` from a grid
    pub fn build_matrix<G>(&mut self, grid: &G, λ: T) -> Result<(), CholeskyError>
    where
        G: OverlapProvider<T> + ?Sized,
    {
        let n = grid.size();
        let A = grid.overlap_columns(n, λ);
        if A.size() != (n, n) {
            return Err(CholeskyError::IncompatibleDimension {
                expected: n,
                found: A.ncols(),
            });
        }
        self.set_matrix(&A)
    }

    /// The lower triangular factor, or the system matrix if not yet decomposed
    pub fn factor(&self) -> &Matrix<T> {
        &self.lhs
    }

    /// Current dimension of the factor
    pub fn size(&self) -> usize {
        self.lhs.nrows()
    }

    pub fn is_constructed(&self) -> bool {
        self.is_constructed
    }

    pub fn is_decomposed(&self) -> bool {
        self.is_decomposed
    }

    /// The factor supports adaptivity steps
    pub fn is_refineable(&self) -> bool {
        true
    }

    pub fn settings(&self) -> &CholeskySettings<T> {
        &self.settings
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    // marks lhs as unusable after a failure that left it partially
    // overwritten.  Only set_matrix or build_matrix recover from this.
    fn invalidate(&mut self) {
        self.is_constructed = false;
        self.is_decomposed = false;
    }

    // shared precondition of every maintenance operation
    fn check_decomposed(&self, op: &'static str) -> Result<(), CholeskyError> {
        if self.is_decomposed {
            Ok(())
        } else {
            Err(CholeskyError::ConstructionOrder(op))
        }
    }
}
