//! Nested wall clock timers for the factorization steps.
mod timers;
pub use timers::*;
