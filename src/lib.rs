//! Zerosum - optimal mixed strategies for two-player zero-sum matrix games.
//!
//! Given an m×m payoff matrix from the row player's perspective, this crate
//! computes the row player's optimal mixed strategy and the game value. Two
//! formulations are provided:
//!
//! - **`domain::equilibrium::optimal_strategy`** - *an* optimal strategy
//!   from a single LP solve (not necessarily unique)
//! - **`domain::equilibrium::balanced_strategy`** - the optimal strategy
//!   minimizing the sum of squared probabilities, the canonical
//!   representative when the game has degenerate optima
//!
//! The crate's job is the formulation layer: shifting the payoffs into
//! strictly positive space, assembling the constraints, and decoding the
//! raw solver output back into a probability vector and game value. The
//! actual optimization is delegated to black-box backends behind the
//! `domain::solver` traits:
//!
//! - `HiGHSSolver` - linear programs via the HiGHS solver (`good_lp`)
//! - `ClarabelSolver` - minimum-norm quadratic programs via Clarabel
//!
//! # Modules
//!
//! - [`config`] - Tolerance and logging configuration from TOML files
//! - [`domain`] - Payoff matrices, mixed strategies, formulations, backends
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line driver for the `zerosum` binary
//!
//! # Example
//!
//! ```no_run
//! use zerosum::domain::equilibrium::{self, SolveOptions};
//! use zerosum::domain::solver::HiGHSSolver;
//! use zerosum::domain::MatrixGame;
//!
//! # fn main() -> zerosum::error::Result<()> {
//! // Matching pennies: the only optimal play is an even coin flip.
//! let game = MatrixGame::from_rows(vec![
//!     vec![1.0, -1.0],
//!     vec![-1.0, 1.0],
//! ])?;
//! let eq = equilibrium::optimal_strategy(&game, &HiGHSSolver::new(), &SolveOptions::default())?;
//! assert!(eq.value.abs() < 1e-6);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
