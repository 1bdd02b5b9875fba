//! LP formulation: any optimal mixed strategy from one linear solve.

use tracing::debug;

use crate::domain::solver::{Constraint, LpProblem, LpSolver, VariableBounds};
use crate::domain::{Equilibrium, MatrixGame, MixedStrategy};
use crate::error::{Error, Formulation, Result};

use super::SolveOptions;

/// Compute an optimal mixed strategy for the row player.
///
/// The classic one-LP reduction: shift the payoffs so every entry is
/// strictly positive, then find the cheapest non-negative weighting `x` of
/// the rows that covers every opposing pure column at rate at least 1:
///
/// ```text
/// minimize Σᵢ xᵢ   subject to   Σᵢ (M[i][j] + c) · xᵢ ≥ 1  for every j,
///                               x ≥ 0
/// ```
///
/// The reciprocal of the optimal objective is the shifted game's value;
/// subtracting the shift recovers the true value, and normalizing `x` by
/// its mass yields the probability distribution. Any optimal solution of
/// the LP maps to an optimal strategy, but when the optimal set is a
/// polytope the backend picks an arbitrary vertex; use
/// [`balanced_strategy`](super::balanced_strategy) for a canonical one.
pub fn optimal_strategy<S: LpSolver>(
    game: &MatrixGame,
    solver: &S,
    options: &SolveOptions,
) -> Result<Equilibrium> {
    let m = game.size();

    // Shift only when some entry is non-positive, by twice the magnitude of
    // the minimum so entries stay bounded away from zero, and by at least 1
    // so a zero minimum still ends up strictly positive.
    let minitem = game.min_entry();
    let shift = if minitem <= 0.0 {
        (-2.0 * minitem).max(1.0)
    } else {
        0.0
    };

    // One cover constraint per opposing pure column.
    let constraints = (0..m)
        .map(|j| {
            let coefficients = (0..m).map(|i| game.payoff(i, j) + shift).collect();
            Constraint::geq(coefficients, 1.0)
        })
        .collect();

    let problem = LpProblem {
        objective: vec![1.0; m],
        constraints,
        bounds: vec![VariableBounds::non_negative(); m],
    };

    debug!(size = m, shift, solver = solver.name(), "solving LP game formulation");
    let solution = solver.solve_lp(&problem)?;

    if !solution.is_optimal() {
        return Err(Error::Infeasible {
            formulation: Formulation::Lp,
            size: m,
        });
    }

    let raw: Vec<f64> = solution.values.iter().map(|x| x.max(0.0)).collect();
    let mass: f64 = raw.iter().sum();
    if !(mass > options.feasibility_tol) {
        // Cannot happen for a finite game after the positivity shift.
        return Err(Error::NumericDegeneracy {
            formulation: Formulation::Lp,
            size: m,
            reason: format!("strategy mass {mass} is not positive"),
        });
    }

    let value = 1.0 / mass - shift;
    let strategy = MixedStrategy::normalized(raw).ok_or_else(|| Error::NumericDegeneracy {
        formulation: Formulation::Lp,
        size: m,
        reason: "strategy could not be normalized".into(),
    })?;

    debug!(value, mass, "LP solve decoded");
    Ok(Equilibrium { strategy, value })
}
