//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear programming solver. This
//! implementation wraps it using the good_lp crate for ergonomic Rust usage.

use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, ResolutionError, Solution as _, SolverModel};

use super::{ConstraintSense, LpProblem, LpSolver, Solution, SolutionStatus};
use crate::error::Result;

/// HiGHS-based LP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver;

impl HiGHSSolver {
    /// Create a new HiGHS solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl LpSolver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_lp(&self, problem: &LpProblem) -> Result<Solution> {
        let n = problem.num_vars();

        // Create variables with their box bounds
        let mut vars = variables!();
        let mut var_list = Vec::with_capacity(n);

        for bounds in &problem.bounds {
            let mut v = variable();
            if let Some(lb) = bounds.lower {
                v = v.min(lb);
            }
            if let Some(ub) = bounds.upper {
                v = v.max(ub);
            }
            var_list.push(vars.add(v));
        }

        // Build objective function
        let objective: Expression = var_list
            .iter()
            .zip(problem.objective.iter())
            .map(|(v, c)| *c * *v)
            .sum();

        let mut model = vars.minimise(&objective).using(highs);

        // Add constraints
        for constr in &problem.constraints {
            let lhs: Expression = var_list
                .iter()
                .zip(constr.coefficients.iter())
                .map(|(v, c)| *c * *v)
                .sum();

            let rhs = constr.rhs;

            match constr.sense {
                ConstraintSense::GreaterEqual => {
                    model = model.with(constraint!(lhs >= rhs));
                }
                ConstraintSense::LessEqual => {
                    model = model.with(constraint!(lhs <= rhs));
                }
                ConstraintSense::Equal => {
                    model = model.with(constraint!(lhs == rhs));
                }
            }
        }

        match model.solve() {
            Ok(solution) => {
                let values: Vec<f64> = var_list.iter().map(|v| solution.value(*v)).collect();

                // Re-evaluate the objective with the solved values
                let objective: f64 = values
                    .iter()
                    .zip(problem.objective.iter())
                    .map(|(v, c)| v * c)
                    .sum();

                Ok(Solution {
                    values,
                    objective,
                    status: SolutionStatus::Optimal,
                })
            }
            Err(err) => {
                let status = match err {
                    ResolutionError::Unbounded => SolutionStatus::Unbounded,
                    _ => SolutionStatus::Infeasible,
                };
                Ok(Solution {
                    values: vec![0.0; n],
                    objective: 0.0,
                    status,
                })
            }
        }
    }
}
