//! Game-theoretic domain logic.

mod matrix;
mod mixed;

pub mod equilibrium;
pub mod solver;

// Core domain types
pub use matrix::MatrixGame;
pub use mixed::{Equilibrium, MixedStrategy};
