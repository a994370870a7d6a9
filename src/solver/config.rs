//! # SolverConfig
//!
//! The `SolverConfig` struct holds the parameters of a solver run: colony
//! size, evaporation rate, seed, iteration budget, and the strategy
//! tunables. Configurations are built through [`SolverConfigBuilder`],
//! which validates everything up front: a missing or malformed parameter
//! is a fatal error before the iteration loop starts.
//!
//! ## Example
//!
//! ```rust
//! use antcsp::solver::{Algorithm, SolverConfig};
//!
//! let config = SolverConfig::builder()
//!     .algorithm(Algorithm::Elitist)
//!     .num_ants(30)
//!     .alpha(1.0)
//!     .beta(2.0)
//!     .epsilon(0.05)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.num_ants(), 30);
//! assert_eq!(config.max_iter(), 1000);
//! ```

use crate::error::{CspError, Result};

use super::strategy::UpdateStrategy;

/// Which update rule a run uses. `MinMax` selects the basic
/// pheromone-as-probability rule; `Elitist` the separated
/// pheromone/heuristic formulation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Elitist,
    MinMax,
}

/// Validated parameters for one solver run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    strategy: UpdateStrategy,
    num_ants: usize,
    rho: f64,
    seed: u64,
    max_iter: usize,
    beta: Option<f64>,
    local_search: bool,
    parallel_threshold: usize,
}

impl SolverConfig {
    /// Returns a builder with the default parameters.
    pub fn builder() -> SolverConfigBuilder {
        SolverConfigBuilder::default()
    }

    /// The pheromone update rule, with its strategy-specific tunables.
    pub fn strategy(&self) -> UpdateStrategy {
        self.strategy
    }

    /// Number of ants per iteration.
    pub fn num_ants(&self) -> usize {
        self.num_ants
    }

    /// Evaporation rate.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Seed of the master random number generator.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fixed iteration budget; the loop runs `max_iter + 1` colony
    /// evaluations.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// The `beta` tunable. Loaded and validated alongside `alpha` and
    /// `epsilon` but not consumed by either update formula.
    pub fn beta(&self) -> Option<f64> {
        self.beta
    }

    /// Whether local search was requested. Accepted for configuration
    /// compatibility; no local search is applied.
    pub fn local_search(&self) -> bool {
        self.local_search
    }

    /// Minimum colony size at which ants are evaluated across rayon
    /// workers instead of sequentially.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

/// Builder for [`SolverConfig`].
///
/// Provides a fluent interface; `build` performs all validation.
#[derive(Debug, Clone, Default)]
pub struct SolverConfigBuilder {
    algorithm: Option<Algorithm>,
    num_ants: Option<usize>,
    rho: Option<f64>,
    seed: Option<u64>,
    max_iter: Option<usize>,
    alpha: Option<f64>,
    beta: Option<f64>,
    epsilon: Option<f64>,
    local_search: Option<bool>,
    parallel_threshold: Option<usize>,
}

impl SolverConfigBuilder {
    /// Sets the update rule to run.
    pub fn algorithm(mut self, value: Algorithm) -> Self {
        self.algorithm = Some(value);
        self
    }

    /// Sets the number of ants per iteration.
    pub fn num_ants(mut self, value: usize) -> Self {
        self.num_ants = Some(value);
        self
    }

    /// Sets the evaporation rate.
    pub fn rho(mut self, value: f64) -> Self {
        self.rho = Some(value);
        self
    }

    /// Sets the master random seed.
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Sets the iteration budget.
    pub fn max_iter(mut self, value: usize) -> Self {
        self.max_iter = Some(value);
        self
    }

    /// Sets the heuristic exponent (required by the elitist strategy).
    pub fn alpha(mut self, value: f64) -> Self {
        self.alpha = Some(value);
        self
    }

    /// Sets the `beta` tunable (required by the elitist strategy).
    pub fn beta(mut self, value: f64) -> Self {
        self.beta = Some(value);
        self
    }

    /// Sets the reinforcement scale (required by the elitist strategy).
    pub fn epsilon(mut self, value: f64) -> Self {
        self.epsilon = Some(value);
        self
    }

    /// Sets whether local search is requested.
    pub fn local_search(mut self, value: bool) -> Self {
        self.local_search = Some(value);
        self
    }

    /// Sets the minimum colony size for parallel evaluation.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::Configuration`] when the colony would be empty,
    /// the evaporation rate is out of range for the chosen strategy, or a
    /// tunable the strategy requires is missing.
    pub fn build(self) -> Result<SolverConfig> {
        let algorithm = self.algorithm.unwrap_or_default();
        let num_ants = self.num_ants.unwrap_or(20);
        let rho = self.rho.unwrap_or(0.0003);

        if num_ants == 0 {
            return Err(CspError::Configuration(
                "number of ants cannot be zero".to_string(),
            ));
        }
        if !rho.is_finite() || rho < 0.0 {
            return Err(CspError::Configuration(format!(
                "rho must be a finite non-negative number, got {}",
                rho
            )));
        }

        let strategy = match algorithm {
            Algorithm::MinMax => UpdateStrategy::Basic,
            Algorithm::Elitist => {
                if rho >= 1.0 {
                    return Err(CspError::Configuration(format!(
                        "rho must be below 1 for the elitist strategy, got {}",
                        rho
                    )));
                }
                let alpha = require(self.alpha, "alpha", "elitist")?;
                require(self.beta, "beta", "elitist")?;
                let epsilon = require(self.epsilon, "epsilon", "elitist")?;
                if epsilon <= 0.0 || !epsilon.is_finite() {
                    return Err(CspError::Configuration(format!(
                        "epsilon must be a finite positive number, got {}",
                        epsilon
                    )));
                }
                UpdateStrategy::Elitist { alpha, epsilon }
            }
        };

        Ok(SolverConfig {
            strategy,
            num_ants,
            rho,
            seed: self.seed.unwrap_or(1234),
            max_iter: self.max_iter.unwrap_or(1000),
            beta: self.beta,
            local_search: self.local_search.unwrap_or(false),
            parallel_threshold: self.parallel_threshold.unwrap_or(64),
        })
    }
}

fn require(value: Option<f64>, name: &str, strategy: &str) -> Result<f64> {
    value.ok_or_else(|| {
        CspError::Configuration(format!(
            "{} is required by the {} strategy but was not provided",
            name, strategy
        ))
    })
}
