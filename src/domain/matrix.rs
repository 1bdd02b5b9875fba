//! Validated payoff matrices for two-player zero-sum games.

use crate::error::{Error, Result};

use super::MixedStrategy;

/// An m×m payoff matrix from the row player's perspective.
///
/// Entry `(i, j)` is the payoff to the row player when the row player plays
/// pure strategy `i` and the column player plays pure strategy `j`. The
/// column player's payoff is its negation.
///
/// Construction validates shape and finiteness once; all downstream code
/// can rely on a square, finite matrix with `size >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGame {
    size: usize,
    /// Row-major entries, `size * size` of them.
    entries: Vec<f64>,
}

impl MatrixGame {
    /// Build a game from rows of payoffs.
    ///
    /// Fails with [`Error::MalformedMatrix`] if the input is empty, ragged,
    /// non-square, or contains NaN/infinite entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::MalformedMatrix {
                reason: "matrix is empty".into(),
            });
        }
        let mut entries = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(Error::MalformedMatrix {
                    reason: format!(
                        "matrix is not square: row {} has {} entries, expected {}",
                        i,
                        row.len(),
                        size
                    ),
                });
            }
            for (j, &v) in row.iter().enumerate() {
                if !v.is_finite() {
                    return Err(Error::MalformedMatrix {
                        reason: format!("entry ({i}, {j}) is not finite: {v}"),
                    });
                }
                entries.push(v);
            }
        }
        Ok(Self { size, entries })
    }

    /// Number of pure strategies per player.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Payoff to the row player for pure strategies `(i, j)`.
    pub fn payoff(&self, i: usize, j: usize) -> f64 {
        self.entries[i * self.size + j]
    }

    /// Smallest entry of the matrix.
    pub fn min_entry(&self) -> f64 {
        self.entries.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Expected payoff of a mixed strategy against pure column `j`.
    pub fn expected_payoff(&self, strategy: &MixedStrategy, j: usize) -> f64 {
        (0..self.size)
            .map(|i| strategy.prob(i) * self.payoff(i, j))
            .sum()
    }

    /// Worst-case expected payoff of a mixed strategy over all pure columns.
    ///
    /// For an optimal strategy this equals the game value (up to solver
    /// tolerance); for any strategy it is the payoff it guarantees.
    pub fn security_level(&self, strategy: &MixedStrategy) -> f64 {
        (0..self.size)
            .map(|j| self.expected_payoff(strategy, j))
            .fold(f64::INFINITY, f64::min)
    }
}
