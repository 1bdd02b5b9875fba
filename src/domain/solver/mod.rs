//! LP/QP solver abstraction.
//!
//! The formulation layer builds [`LpProblem`] / [`QpProblem`] values and
//! hands them to a backend through the [`LpSolver`] / [`QpSolver`] traits.
//! Backends report infeasibility through [`SolutionStatus`] rather than an
//! error; deciding whether a non-optimal status is fatal belongs to the
//! caller, which has the formulation context.
//!
//! Two backends ship with the crate:
//!
//! - [`HiGHSSolver`] - linear programs via the HiGHS solver (`good_lp`)
//! - [`ClarabelSolver`] - minimum-norm quadratic programs via Clarabel

mod clarabel;
mod highs;

pub use self::clarabel::ClarabelSolver;
pub use highs::HiGHSSolver;

use crate::error::Result;

/// Direction of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    LessEqual,
    GreaterEqual,
    Equal,
}

/// One linear constraint: `coefficients · x <sense> rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub sense: ConstraintSense,
    pub rhs: f64,
}

impl Constraint {
    pub fn geq(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    pub fn leq(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    pub fn eq(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }
}

/// Box bounds for a single variable. `None` means unbounded on that side.
#[derive(Debug, Clone, Copy)]
pub struct VariableBounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl VariableBounds {
    /// `x >= 0`.
    pub fn non_negative() -> Self {
        Self {
            lower: Some(0.0),
            upper: None,
        }
    }

    /// `0 <= x <= 1`.
    pub fn unit_interval() -> Self {
        Self {
            lower: Some(0.0),
            upper: Some(1.0),
        }
    }
}

/// A linear program: minimize `objective · x` subject to constraints and bounds.
#[derive(Debug, Clone)]
pub struct LpProblem {
    pub objective: Vec<f64>,
    pub constraints: Vec<Constraint>,
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// A minimum-norm quadratic program: minimize `‖x‖²` subject to constraints
/// and bounds.
///
/// The objective is fixed to the squared Euclidean norm (identity weighting,
/// zero target); that is the only quadratic objective this crate needs, and
/// fixing it keeps backends free of objective-matrix plumbing.
#[derive(Debug, Clone)]
pub struct QpProblem {
    pub constraints: Vec<Constraint>,
    pub bounds: Vec<VariableBounds>,
}

impl QpProblem {
    pub fn num_vars(&self) -> usize {
        self.bounds.len()
    }
}

/// Outcome class of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    Optimal,
    Infeasible,
    Unbounded,
}

/// Raw backend output: one value per variable plus the objective reached.
#[derive(Debug, Clone)]
pub struct Solution {
    pub values: Vec<f64>,
    pub objective: f64,
    pub status: SolutionStatus,
}

impl Solution {
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// A linear-program backend.
pub trait LpSolver {
    /// Unique identifier for logging.
    fn name(&self) -> &'static str;

    /// Minimize the linear objective over the feasible set.
    fn solve_lp(&self, problem: &LpProblem) -> Result<Solution>;
}

/// A quadratic-program backend for minimum-norm problems.
pub trait QpSolver {
    /// Unique identifier for logging.
    fn name(&self) -> &'static str;

    /// Find the feasible point of minimum squared Euclidean norm.
    fn solve_qp(&self, problem: &QpProblem) -> Result<Solution>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_constructors_set_sense() {
        assert_eq!(
            Constraint::geq(vec![1.0], 1.0).sense,
            ConstraintSense::GreaterEqual
        );
        assert_eq!(
            Constraint::leq(vec![1.0], 1.0).sense,
            ConstraintSense::LessEqual
        );
        assert_eq!(Constraint::eq(vec![1.0], 1.0).sense, ConstraintSense::Equal);
    }

    #[test]
    fn unit_interval_bounds() {
        let b = VariableBounds::unit_interval();
        assert_eq!(b.lower, Some(0.0));
        assert_eq!(b.upper, Some(1.0));
    }

    #[test]
    fn solution_optimal_check() {
        let s = Solution {
            values: vec![],
            objective: 0.0,
            status: SolutionStatus::Infeasible,
        };
        assert!(!s.is_optimal());
    }
}
