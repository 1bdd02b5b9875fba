use std::fmt;

use thiserror::Error;

/// Which problem formulation a solver failure came from.
///
/// Carried in error variants so a caller can tell whether the linear
/// or the quadratic formulation broke down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formulation {
    /// Linear program (any optimal strategy).
    Lp,
    /// Quadratic program (balanced optimal strategy).
    Qp,
}

impl fmt::Display for Formulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formulation::Lp => write!(f, "LP"),
            Formulation::Qp => write!(f, "QP"),
        }
    }
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    /// The payoff matrix is not a valid game: empty, non-square,
    /// or containing non-finite entries. Raised before any solver call.
    #[error("malformed payoff matrix: {reason}")]
    MalformedMatrix { reason: String },

    /// The backend reported no feasible point. This should not arise for a
    /// finite game after the positivity shift; it indicates a formulation
    /// bug or numerical breakdown and is never retried.
    #[error("{formulation} formulation reported infeasible for a {size}x{size} game")]
    Infeasible { formulation: Formulation, size: usize },

    /// The backend returned a solution that cannot be decoded into a
    /// probability distribution (non-positive mass, or a normalization
    /// mismatch beyond tolerance).
    #[error("{formulation} solve numerically degenerate for a {size}x{size} game: {reason}")]
    NumericDegeneracy {
        formulation: Formulation,
        size: usize,
        reason: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
