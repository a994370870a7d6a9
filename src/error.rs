//! # Error Types
//!
//! This module defines custom error types for the solver. It provides
//! specific error variants for the different failure scenarios that may
//! occur while loading a problem instance or running the optimization.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use antcsp::error::{CspError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the solver.
///
/// All failures are surfaced synchronously to the caller; nothing is
/// retried. Configuration and input errors are fatal before the iteration
/// loop starts.
#[derive(Error, Debug)]
pub enum CspError {
    /// Error that occurs when a required parameter is absent or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an instance file does not follow the expected format.
    #[error("Input format error: {0}")]
    InputFormat(String),

    /// Error that occurs when a structural invariant of the problem is violated,
    /// such as target strings of unequal length.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Error that occurs when a probability row sums to zero and cannot be
    /// normalized without dividing by zero.
    #[error("Degenerate probability row at position {position}: row sum is {sum}")]
    DegenerateRow { position: usize, sum: f64 },

    /// Error that occurs when a colony holds no ants to select a best one from.
    #[error("Empty colony error: cannot select a best ant from an empty colony")]
    EmptyColony,

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for solver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `CspError`.
///
/// ## Examples
///
/// ```rust
/// use antcsp::error::{CspError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, CspError>;
