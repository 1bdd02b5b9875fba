//! Mixed strategies and solved equilibria.

/// A probability distribution over a player's pure strategies.
///
/// Entries are non-negative and sum to 1. The smart constructor
/// [`MixedStrategy::normalized`] is the only way to build one, so every
/// value of this type is a genuine distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct MixedStrategy(Vec<f64>);

impl MixedStrategy {
    /// Build a strategy from raw solver output.
    ///
    /// Entries that came back slightly negative are rounded up to zero,
    /// then the vector is divided by its mass. Normalizing by the actual
    /// sum (rather than multiplying by the predicted scale) absorbs the
    /// solver's own rounding. Returns `None` when the mass is not strictly
    /// positive, which callers treat as numeric degeneracy.
    pub fn normalized(raw: Vec<f64>) -> Option<Self> {
        let clamped: Vec<f64> = raw.into_iter().map(|x| x.max(0.0)).collect();
        let mass: f64 = clamped.iter().sum();
        if !(mass > 0.0) || !mass.is_finite() {
            return None;
        }
        Some(Self(clamped.into_iter().map(|x| x / mass).collect()))
    }

    /// Number of pure strategies.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Probability assigned to pure strategy `i`.
    pub fn prob(&self, i: usize) -> f64 {
        self.0[i]
    }

    /// All probabilities, in pure-strategy order.
    pub fn probabilities(&self) -> &[f64] {
        &self.0
    }

    /// Sum of squared probabilities. The balanced solver minimizes this.
    pub fn sum_of_squares(&self) -> f64 {
        self.0.iter().map(|p| p * p).sum()
    }

    /// Indices of pure strategies played with probability above `tol`.
    pub fn support(&self, tol: f64) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, &p)| p > tol)
            .map(|(i, _)| i)
            .collect()
    }
}

/// A solved game: the row player's strategy and the value it guarantees.
#[derive(Debug, Clone)]
pub struct Equilibrium {
    /// The row player's optimal mixed strategy.
    pub strategy: MixedStrategy,
    /// Guaranteed expected payoff against a worst-case opponent.
    pub value: f64,
}
