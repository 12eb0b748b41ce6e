//! __adaptchol__ maintains the Cholesky factor of a symmetric positive
//! definite system matrix while the underlying set of points changes.
//!
//! The typical client is an online density estimator on an adaptive sparse
//! grid.  Its system matrix has the form
//!
//! $$
//! A = M + \lambda I,
//! $$
//!
//! where $M_{ij}$ is the $L^2$ inner product of the basis functions of
//! points $i$ and $j$ and $\lambda > 0$ is a regularization parameter.  Each
//! adaptivity step removes some points (coarsening) and appends others
//! (refinement).  Rather than refactoring $A$ at $O(n^3)$ cost after every
//! step, the factor is updated in place:
//!
//! * removed points are moved to the front or back of the factor by a
//!   circular shift realized with plane rotations,
//! * points moved to the back are truncated, points moved to the front are
//!   dropped and the remaining block is repaired with rank one updates,
//! * new points are appended one at a time by forward substitution.
//!
//! See [`cholesky::AdaptiveCholesky`] for the main type and
//! [`grid::OverlapProvider`] for the interface to the grid.
//!
//! # Features
//!
//! * `serde` (default): JSON input and output of [`cholesky::CholeskySettings`].
//! * `lapack`: use LAPACK `?potrf` / `?potri` for full decompositions and
//!   inverses.  Select a provider with one of `lapack-openblas`,
//!   `lapack-netlib`, `lapack-accelerate` or `lapack-mkl`.

//Rust hates greek characters
#![allow(confusable_idents)]

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod cholesky;
pub mod grid;
pub mod timers;
