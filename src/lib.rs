pub mod colony;
pub mod error;
pub mod instance;
pub mod matrix;
pub mod rng;
pub mod solver;

// Re-export commonly used types for convenience
pub use error::{CspError, Result};
pub use instance::ProblemInstance;
pub use solver::{Algorithm, SolveOutcome, Solver, SolverConfig, SolverConfigBuilder};
