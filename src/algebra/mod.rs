//! Dense linear algebra types and kernels used by the incremental factorization.
//!
//! All matrices are stored densely in column major format.  The kernels in
//! this module operate on leading square blocks of a [`Matrix`] so that a
//! factor can be grown or shrunk without reallocation during an adaptivity
//! step.

// first import and flatten the crate's collection
// of core numeric types and matrix / vector traits.

mod adjoint;
mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod vecmath;
pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;

#[cfg(test)]
mod tests;
