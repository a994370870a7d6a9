//! # HeuristicPheromoneMatrix
//!
//! The pheromone and heuristic state of the search: one cell per
//! (string position, alphabet symbol) pair, holding a static heuristic
//! count and a mutable pheromone value. Both matrices in this module are
//! flat row-major containers indexed by `(position, symbol)` rather than
//! nested vectors, so a row and a column can never be confused.
//!
//! The heuristic half is computed once from the problem instance and never
//! mutated; the pheromone half is the only shared state that evolves across
//! iterations, and it is owned exclusively by the solver.

use tracing::warn;

use crate::error::{CspError, Result};
use crate::instance::ProblemInstance;

/// One (position, symbol) cell of the matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Number of target strings carrying this symbol at this position.
    /// Computed once from the instance, read-only afterwards.
    pub heuristic: u32,
    /// Learned preference for this symbol at this position, mutated every
    /// iteration by the update strategy.
    pub pheromone: f64,
}

/// S×L matrix of [`Cell`]s, where S is the string length and L the
/// alphabet size.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicPheromoneMatrix {
    cells: Vec<Cell>,
    positions: usize,
    symbols: usize,
}

impl HeuristicPheromoneMatrix {
    /// Builds the matrix for a problem instance.
    ///
    /// Heuristic counts come from a direct scan of the target strings;
    /// every pheromone value starts at the uniform prior `1/L`. The result
    /// is deterministic; no randomness is involved.
    pub fn new(instance: &ProblemInstance) -> Self {
        let positions = instance.string_len();
        let symbols = instance.alphabet_len();
        let prior = 1.0 / symbols as f64;

        let mut cells = vec![
            Cell {
                heuristic: 0,
                pheromone: prior,
            };
            positions * symbols
        ];

        for target in instance.targets() {
            for (position, symbol) in target.chars().enumerate() {
                if let Some(index) = instance.symbol_index(symbol) {
                    cells[position * symbols + index].heuristic += 1;
                }
            }
        }

        Self {
            cells,
            positions,
            symbols,
        }
    }

    /// Number of string positions (rows).
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Number of alphabet symbols (columns).
    pub fn symbols(&self) -> usize {
        self.symbols
    }

    fn index(&self, position: usize, symbol: usize) -> usize {
        debug_assert!(position < self.positions && symbol < self.symbols);
        position * self.symbols + symbol
    }

    /// The heuristic count for a cell.
    pub fn heuristic(&self, position: usize, symbol: usize) -> u32 {
        self.cells[self.index(position, symbol)].heuristic
    }

    /// The current pheromone value of a cell.
    pub fn pheromone(&self, position: usize, symbol: usize) -> f64 {
        self.cells[self.index(position, symbol)].pheromone
    }

    /// Subtracts `rho` from every pheromone value (linear evaporation, used
    /// by the basic update rule).
    pub fn evaporate_linear(&mut self, rho: f64) {
        for cell in &mut self.cells {
            cell.pheromone -= rho;
        }
    }

    /// Scales every pheromone value by `1 - rho` (multiplicative
    /// evaporation, used by the elitist update rule).
    pub fn evaporate_scaled(&mut self, rho: f64) {
        for cell in &mut self.cells {
            cell.pheromone *= 1.0 - rho;
        }
    }

    /// Adds `amount` to the pheromone of the cell at each position chosen
    /// by `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::InvariantViolation`] if the path does not cover
    /// every position or selects a symbol outside the alphabet.
    pub fn deposit(&mut self, path: &[usize], amount: f64) -> Result<()> {
        if path.len() != self.positions {
            return Err(CspError::InvariantViolation(format!(
                "deposit path covers {} positions but the matrix has {}",
                path.len(),
                self.positions
            )));
        }
        for (position, &symbol) in path.iter().enumerate() {
            if symbol >= self.symbols {
                return Err(CspError::InvariantViolation(format!(
                    "deposit path selects symbol index {} at position {} but the alphabet has {} symbols",
                    symbol, position, self.symbols
                )));
            }
            self.cells[position * self.symbols + symbol].pheromone += amount;
        }
        Ok(())
    }

    /// Clamps every pheromone value to `>= 0`, then rescales each row to sum
    /// to exactly 1, turning the pheromone itself into a per-position
    /// probability distribution.
    ///
    /// A row whose values were all driven to zero cannot be rescaled; such a
    /// row is reset to the uniform prior instead of dividing by zero.
    pub fn normalize_pheromone(&mut self) {
        let prior = 1.0 / self.symbols as f64;
        for position in 0..self.positions {
            let row = &mut self.cells[position * self.symbols..(position + 1) * self.symbols];
            let mut sum = 0.0;
            for cell in row.iter_mut() {
                if !cell.pheromone.is_finite() || cell.pheromone < 0.0 {
                    cell.pheromone = 0.0;
                }
                sum += cell.pheromone;
            }
            if sum > 0.0 {
                for cell in row.iter_mut() {
                    cell.pheromone /= sum;
                }
            } else {
                warn!(position, "pheromone row evaporated to zero, resetting to uniform prior");
                for cell in row.iter_mut() {
                    cell.pheromone = prior;
                }
            }
        }
    }

    /// Returns the pheromone rows as a probability matrix, for the update
    /// rule in which pheromone doubles as the sampling distribution.
    ///
    /// Call [`HeuristicPheromoneMatrix::normalize_pheromone`] first; this
    /// method copies the rows as they are.
    pub fn pheromone_probabilities(&self) -> ProbabilityMatrix {
        ProbabilityMatrix {
            values: self.cells.iter().map(|cell| cell.pheromone).collect(),
            positions: self.positions,
            symbols: self.symbols,
        }
    }

    /// Derives the sampling distribution from pheromone and heuristic
    /// information: the weight of a cell is
    /// `pheromone * heuristic^alpha`, normalized per row.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::DegenerateRow`] when a row's weights sum to zero
    /// or a non-finite value; NaN is never propagated silently.
    pub fn probabilities(&self, alpha: f64) -> Result<ProbabilityMatrix> {
        let values = self
            .cells
            .iter()
            .map(|cell| cell.pheromone * (cell.heuristic as f64).powf(alpha))
            .collect();
        let mut matrix = ProbabilityMatrix {
            values,
            positions: self.positions,
            symbols: self.symbols,
        };
        matrix.normalize()?;
        Ok(matrix)
    }
}

/// S×L matrix of per-position selection probabilities, derived from a
/// [`HeuristicPheromoneMatrix`] once per iteration and consumed by the ants
/// of that iteration. Never persisted across iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    values: Vec<f64>,
    positions: usize,
    symbols: usize,
}

impl ProbabilityMatrix {
    /// Number of string positions (rows).
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Number of alphabet symbols (columns).
    pub fn symbols(&self) -> usize {
        self.symbols
    }

    /// The probabilities of row `position`, one entry per alphabet symbol.
    pub fn row(&self, position: usize) -> &[f64] {
        &self.values[position * self.symbols..(position + 1) * self.symbols]
    }

    /// The probability of picking `symbol` at `position`.
    pub fn value(&self, position: usize, symbol: usize) -> f64 {
        self.values[position * self.symbols + symbol]
    }

    /// Clamps every entry to `>= 0` and rescales each row to sum to
    /// exactly 1.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::DegenerateRow`] when a row sums to zero or a
    /// non-finite value after clamping.
    pub fn normalize(&mut self) -> Result<()> {
        for position in 0..self.positions {
            let row = &mut self.values[position * self.symbols..(position + 1) * self.symbols];
            let mut sum = 0.0;
            for value in row.iter_mut() {
                if !value.is_finite() || *value < 0.0 {
                    *value = 0.0;
                }
                sum += *value;
            }
            if !(sum > 0.0) || !sum.is_finite() {
                return Err(CspError::DegenerateRow { position, sum });
            }
            for value in row.iter_mut() {
                *value /= sum;
            }
        }
        Ok(())
    }
}
