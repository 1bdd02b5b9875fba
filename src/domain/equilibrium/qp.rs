//! QP formulation: the balanced (minimum-norm) optimal strategy.

use tracing::debug;

use crate::domain::solver::{Constraint, LpSolver, QpProblem, QpSolver, VariableBounds};
use crate::domain::{Equilibrium, MatrixGame, MixedStrategy};
use crate::error::{Error, Formulation, Result};

use super::SolveOptions;

/// Compute the optimal mixed strategy with minimum sum of squared
/// probabilities.
///
/// When the game has degenerate optima they form a polytope face; a plain
/// LP solve returns whichever vertex the backend lands on. This solver
/// instead intersects the optimality constraints with the known optimal
/// mass and picks the point of minimum squared norm: a deterministic,
/// basis-independent representative. For a symmetric game it is itself
/// symmetric under every automorphism of the matrix.
///
/// Formulation, after shifting payoffs up by `w` (always at least 1, so
/// the equality below stays well-posed even for already-positive
/// matrices):
///
/// ```text
/// minimize ‖p‖²   subject to   Σᵢ (M[i][j] + w) · pᵢ ≥ 1  for every j,
///                              Σᵢ pᵢ = 1 / (v + w),
///                              0 ≤ p ≤ 1
/// ```
///
/// where `v`, the game value, comes from a first-phase LP solve. The
/// equality pins `p` to the optimal face of the shifted game (for a
/// value-zero game it is the familiar `Σp = 1/w`); normalizing `p` by its
/// mass then yields the probability distribution.
pub fn balanced_strategy<L: LpSolver, Q: QpSolver>(
    game: &MatrixGame,
    lp_solver: &L,
    qp_solver: &Q,
    options: &SolveOptions,
) -> Result<Equilibrium> {
    let m = game.size();

    // Phase 1: the game value fixes the mass of the optimal face.
    let value = super::optimal_strategy(game, lp_solver, options)?.value;

    // Unconditional shift: twice the magnitude of the minimum, at least 1,
    // and large enough that the shifted value v + w is at least 1; the
    // unit box bound below would otherwise cut off the optimal face when
    // the game value is negative.
    let minitem = game.min_entry();
    let w = (-2.0 * minitem).max(1.0).max(1.0 - value);
    let target_mass = 1.0 / (value + w);

    let mut constraints = Vec::with_capacity(m + 1);
    constraints.push(Constraint::eq(vec![1.0; m], target_mass));
    for j in 0..m {
        let coefficients = (0..m).map(|i| game.payoff(i, j) + w).collect();
        constraints.push(Constraint::geq(coefficients, 1.0));
    }

    let problem = QpProblem {
        constraints,
        bounds: vec![VariableBounds::unit_interval(); m],
    };

    debug!(
        size = m,
        shift = w,
        target_mass,
        solver = qp_solver.name(),
        "solving QP game formulation"
    );
    let solution = qp_solver.solve_qp(&problem)?;

    if !solution.is_optimal() {
        return Err(Error::Infeasible {
            formulation: Formulation::Qp,
            size: m,
        });
    }

    let raw: Vec<f64> = solution.values.iter().map(|p| p.max(0.0)).collect();
    let mass: f64 = raw.iter().sum();
    if (mass - target_mass).abs() > options.normalization_tol * target_mass.max(1.0) {
        return Err(Error::NumericDegeneracy {
            formulation: Formulation::Qp,
            size: m,
            reason: format!("solution mass {mass} deviates from expected {target_mass}"),
        });
    }

    let strategy = MixedStrategy::normalized(raw).ok_or_else(|| Error::NumericDegeneracy {
        formulation: Formulation::Qp,
        size: m,
        reason: "strategy could not be normalized".into(),
    })?;

    debug!(value, mass, norm = strategy.sum_of_squares(), "QP solve decoded");
    Ok(Equilibrium { strategy, value })
}
