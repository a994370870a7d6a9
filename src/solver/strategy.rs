//! # UpdateStrategy
//!
//! The two pheromone update rules, expressed as a tagged variant dispatched
//! by the solver rather than through inheritance. Strategy-specific
//! parameters live in the variant payload.

use std::cmp::Ordering;

use crate::colony::Ant;
use crate::error::Result;
use crate::matrix::{HeuristicPheromoneMatrix, ProbabilityMatrix};

/// Pheromone update rule applied after each iteration's best ant has been
/// selected.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateStrategy {
    /// Pheromone doubles as the sampling distribution. Evaporation subtracts
    /// a constant `rho` from every cell, the best ant's path receives a
    /// deposit proportional to solution quality (`1 - best_max / S`), and
    /// the rows are normalized directly back into probabilities.
    Basic,
    /// Pheromone and heuristic information are kept separate. Evaporation is
    /// multiplicative (`(1 - rho) * pheromone`), only the best ant's path is
    /// reinforced with `epsilon / best_max`, and the sampling distribution
    /// is recomputed as `pheromone * heuristic^alpha`, renormalized per row.
    Elitist {
        /// Exponent on the heuristic counts in the probability derivation.
        alpha: f64,
        /// Scale of the reinforcement deposited on the best ant's path.
        epsilon: f64,
    },
}

impl UpdateStrategy {
    /// Orders two ants, best first: the basic rule minimizes total score,
    /// the elitist rule minimizes the maximum Hamming distance.
    pub fn compare(&self, a: &Ant, b: &Ant) -> Ordering {
        match self {
            UpdateStrategy::Basic => a.score().cmp(&b.score()),
            UpdateStrategy::Elitist { .. } => a.max_distance().cmp(&b.max_distance()),
        }
    }

    /// Derives the sampling distribution for the first iteration, before
    /// any update has run.
    pub fn initial_probabilities(
        &self,
        matrix: &HeuristicPheromoneMatrix,
    ) -> Result<ProbabilityMatrix> {
        match self {
            UpdateStrategy::Basic => Ok(matrix.pheromone_probabilities()),
            UpdateStrategy::Elitist { alpha, .. } => matrix.probabilities(*alpha),
        }
    }

    /// Applies one evaporation-and-deposit cycle for the given best ant and
    /// returns the renormalized sampling distribution for the next
    /// iteration.
    ///
    /// The matrix must not be shared with any still-sampling ant; the
    /// solver orders the colony's read phase strictly before this write
    /// phase.
    pub fn apply(
        &self,
        matrix: &mut HeuristicPheromoneMatrix,
        best: &Ant,
        rho: f64,
    ) -> Result<ProbabilityMatrix> {
        match self {
            UpdateStrategy::Basic => {
                matrix.evaporate_linear(rho);
                let quality = 1.0 - best.max_distance() as f64 / matrix.positions() as f64;
                matrix.deposit(best.path(), quality)?;
                matrix.normalize_pheromone();
                Ok(matrix.pheromone_probabilities())
            }
            UpdateStrategy::Elitist { alpha, epsilon } => {
                matrix.evaporate_scaled(rho);
                if best.max_distance() > 0 {
                    matrix.deposit(best.path(), epsilon / best.max_distance() as f64)?;
                }
                matrix.probabilities(*alpha)
            }
        }
    }
}
