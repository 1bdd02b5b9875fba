//! Clarabel solver implementation for minimum-norm quadratic programs.
//!
//! Clarabel is a pure-Rust interior-point solver for conic problems. It
//! expects constraints in the form `A x + s = b, s ∈ K`, so this adapter
//! stacks equality rows into the zero cone, then inequalities (normalized
//! to `≤`) and box bounds into the non-negative cone.

use clarabel::algebra::CscMatrix;
use clarabel::solver::{
    DefaultSettings, DefaultSolver, IPSolver, SolverStatus,
    SupportedConeT::{NonnegativeConeT, ZeroConeT},
};

use super::{ConstraintSense, QpProblem, QpSolver, Solution, SolutionStatus};
use crate::error::Result;

/// Clarabel-based minimum-norm QP solver.
#[derive(Debug, Default, Clone)]
pub struct ClarabelSolver;

impl ClarabelSolver {
    /// Create a new Clarabel solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl QpSolver for ClarabelSolver {
    fn name(&self) -> &'static str {
        "clarabel"
    }

    fn solve_qp(&self, problem: &QpProblem) -> Result<Solution> {
        let n = problem.num_vars();

        // minimize ‖x‖² as ½ xᵀ(2I)x, so the reported objective is the
        // squared norm itself
        let p = CscMatrix::new(
            n,
            n,
            (0..=n).collect(),
            (0..n).collect(),
            vec![2.0; n],
        );
        let q = vec![0.0; n];

        // Equality rows first (zero cone), then everything else as `≤`
        // rows (non-negative cone).
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut b: Vec<f64> = Vec::new();

        let mut num_eq = 0;
        for constr in &problem.constraints {
            if constr.sense == ConstraintSense::Equal {
                rows.push(constr.coefficients.clone());
                b.push(constr.rhs);
                num_eq += 1;
            }
        }
        for constr in &problem.constraints {
            match constr.sense {
                ConstraintSense::Equal => {}
                ConstraintSense::LessEqual => {
                    rows.push(constr.coefficients.clone());
                    b.push(constr.rhs);
                }
                ConstraintSense::GreaterEqual => {
                    rows.push(constr.coefficients.iter().map(|c| -c).collect());
                    b.push(-constr.rhs);
                }
            }
        }
        for (i, bounds) in problem.bounds.iter().enumerate() {
            if let Some(lb) = bounds.lower {
                let mut row = vec![0.0; n];
                row[i] = -1.0;
                rows.push(row);
                b.push(-lb);
            }
            if let Some(ub) = bounds.upper {
                let mut row = vec![0.0; n];
                row[i] = 1.0;
                rows.push(row);
                b.push(ub);
            }
        }
        let num_ineq = rows.len() - num_eq;

        let a = csc_from_rows(&rows, n);
        let mut cones = Vec::new();
        if num_eq > 0 {
            cones.push(ZeroConeT(num_eq));
        }
        if num_ineq > 0 {
            cones.push(NonnegativeConeT(num_ineq));
        }

        let settings = DefaultSettings {
            verbose: false,
            ..DefaultSettings::default()
        };

        let mut solver = DefaultSolver::new(&p, &q, &a, &b, &cones, settings);
        solver.solve();

        let status = match solver.solution.status {
            SolverStatus::Solved | SolverStatus::AlmostSolved => SolutionStatus::Optimal,
            SolverStatus::DualInfeasible | SolverStatus::AlmostDualInfeasible => {
                SolutionStatus::Unbounded
            }
            _ => SolutionStatus::Infeasible,
        };

        Ok(Solution {
            values: solver.solution.x.clone(),
            objective: solver.solution.obj_val,
            status,
        })
    }
}

/// Build a compressed-sparse-column matrix from dense rows.
fn csc_from_rows(rows: &[Vec<f64>], n: usize) -> CscMatrix<f64> {
    let m = rows.len();
    let mut colptr = Vec::with_capacity(n + 1);
    let mut rowval = Vec::new();
    let mut nzval = Vec::new();

    colptr.push(0);
    for j in 0..n {
        for (i, row) in rows.iter().enumerate() {
            if row[j] != 0.0 {
                rowval.push(i);
                nzval.push(row[j]);
            }
        }
        colptr.push(rowval.len());
    }

    CscMatrix::new(m, n, colptr, rowval, nzval)
}
