//! # Solver
//!
//! The `Solver` owns the problem instance, the pheromone matrix, and the
//! configuration, and drives the iterate–evaluate–update loop: each
//! iteration a colony of ants samples solutions from the current
//! probability matrix, the best ant is selected under the strategy's
//! comparator, and the pheromone is updated and renormalized for the next
//! round. The loop runs a fixed iteration budget; there is no
//! convergence-based early stop.

pub mod config;
pub mod strategy;

pub use config::{Algorithm, SolverConfig, SolverConfigBuilder};
pub use strategy::UpdateStrategy;

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::colony::{Ant, Colony};
use crate::error::{CspError, Result};
use crate::instance::ProblemInstance;
use crate::matrix::HeuristicPheromoneMatrix;
use crate::rng::RandomNumberGenerator;

/// The best solution found by a run, with its scores and the number of
/// colony evaluations performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// The best solution string found.
    pub solution: String,
    /// Sum of Hamming distances from the solution to all targets.
    pub score: u64,
    /// Smallest Hamming distance to any target.
    pub min_distance: u64,
    /// Largest Hamming distance to any target.
    pub max_distance: u64,
    /// Number of colony evaluations performed (`max_iter + 1`).
    pub iterations: usize,
}

/// Drives the ant colony over a problem instance until the iteration
/// budget is exhausted.
#[derive(Debug)]
pub struct Solver {
    instance: ProblemInstance,
    config: SolverConfig,
    matrix: HeuristicPheromoneMatrix,
    rng: RandomNumberGenerator,
}

impl Solver {
    /// Creates a solver for the given instance and configuration.
    ///
    /// The pheromone matrix is initialized from the instance (uniform
    /// prior, heuristic counts) and the master generator is seeded from
    /// the configuration.
    pub fn new(instance: ProblemInstance, config: SolverConfig) -> Self {
        let matrix = HeuristicPheromoneMatrix::new(&instance);
        let rng = RandomNumberGenerator::from_seed(config.seed());
        Self {
            instance,
            config,
            matrix,
            rng,
        }
    }

    /// The problem instance this solver runs on.
    pub fn instance(&self) -> &ProblemInstance {
        &self.instance
    }

    /// The current pheromone and heuristic state of the search.
    pub fn matrix(&self) -> &HeuristicPheromoneMatrix {
        &self.matrix
    }

    /// Runs the full iteration loop and returns the best solution found.
    ///
    /// Iterations `0..=max_iter` each evaluate one colony, so the budget
    /// `max_iter = N` performs exactly `N + 1` colony evaluations; the
    /// final iteration selects a best ant but applies no further update.
    /// Within an iteration the colony's read phase completes before the
    /// pheromone write phase begins.
    ///
    /// # Errors
    ///
    /// Propagates evaluation and update failures, such as a degenerate
    /// probability row; no iteration is retried.
    pub fn solve(&mut self) -> Result<SolveOutcome> {
        let strategy = self.config.strategy();
        if self.config.local_search() {
            debug!("local search requested; not applied by this solver");
        }

        let mut probabilities = strategy.initial_probabilities(&self.matrix)?;
        let max_iter = self.config.max_iter();
        let mut best: Option<Ant> = None;

        for iteration in 0..=max_iter {
            let colony = Colony::evaluate(
                &probabilities,
                &self.instance,
                self.config.num_ants(),
                &mut self.rng,
                self.config.parallel_threshold(),
            )?;
            let iteration_best = colony.best_by(|a, b| strategy.compare(a, b))?.clone();

            let current = match best.take() {
                Some(previous)
                    if strategy.compare(&previous, &iteration_best) != Ordering::Greater =>
                {
                    previous
                }
                _ => iteration_best,
            };

            info!(
                iteration,
                score = current.score(),
                min = current.min_distance(),
                max = current.max_distance(),
                "iteration complete"
            );

            if iteration < max_iter {
                probabilities = strategy.apply(&mut self.matrix, &current, self.config.rho())?;
            }
            best = Some(current);
        }

        let best = best.ok_or(CspError::EmptyColony)?;
        Ok(SolveOutcome {
            solution: best.solution().to_string(),
            score: best.score(),
            min_distance: best.min_distance(),
            max_distance: best.max_distance(),
            iterations: max_iter + 1,
        })
    }
}
