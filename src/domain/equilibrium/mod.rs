//! Equilibrium computation for zero-sum matrix games.
//!
//! Two independent, synchronous entry points, both pure functions of the
//! payoff matrix:
//!
//! - [`optimal_strategy`] - *an* optimal mixed strategy for the row player,
//!   from a single LP solve. When the game has degenerate optima, which
//!   vertex comes back depends on the backend.
//! - [`balanced_strategy`] - the unique optimal strategy of minimum
//!   sum-of-squares, from a QP solve over the optimal polytope. Use it when
//!   downstream logic needs a canonical, basis-independent representative
//!   (for example tie-breaking among symmetric optima).
//!
//! Both formulations first shift the payoffs into strictly positive space;
//! the LP shifts only when needed, the balanced solver always shifts by at
//! least 1 so its equality constraint stays well-posed. The shift policies
//! are deliberately different.

mod lp;
mod qp;

pub use lp::optimal_strategy;
pub use qp::balanced_strategy;

use serde::Deserialize;

/// Tolerances applied when decoding raw solver output.
///
/// The backends have their own internal stopping tolerances; these govern
/// only the sanity checks this crate performs on what they return. They are
/// deliberately explicit parameters rather than inherited solver defaults.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Smallest strategy mass accepted from the LP before the solve is
    /// declared degenerate.
    pub feasibility_tol: f64,
    /// Maximum deviation of the QP solution's mass from the value fixed by
    /// its equality constraint, relative to that value (floored at 1).
    pub normalization_tol: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            feasibility_tol: 1e-9,
            normalization_tol: 1e-6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerances() {
        let opts = SolveOptions::default();
        assert_eq!(opts.feasibility_tol, 1e-9);
        assert_eq!(opts.normalization_tol, 1e-6);
    }
}
