//! # ProblemInstance
//!
//! The `ProblemInstance` struct is the immutable, parsed form of a closest
//! string problem: an ordered alphabet, the set of equal-length target
//! strings, and the dimensions derived from them. Instances are either
//! built directly from parts or loaded from the text format described in
//! [`ProblemInstance::from_reader`].
//!
//! All structural invariants are enforced at load time, so the optimization
//! loop can assume a well-formed problem.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{CspError, Result};

/// An immutable closest string problem: the alphabet, the target strings,
/// and the dimensions derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    alphabet: Vec<char>,
    inverse_alphabet: HashMap<char, usize>,
    targets: Vec<String>,
    string_len: usize,
}

impl ProblemInstance {
    /// Builds an instance from an alphabet and a set of target strings.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::InvariantViolation`] if the alphabet is empty or
    /// contains duplicate symbols, if no target strings are given, if the
    /// target strings do not all have the same length, or if a target
    /// contains a symbol outside the alphabet.
    pub fn new(alphabet: Vec<char>, targets: Vec<String>) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(CspError::InvariantViolation(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }

        let mut inverse_alphabet = HashMap::with_capacity(alphabet.len());
        for (index, &symbol) in alphabet.iter().enumerate() {
            if inverse_alphabet.insert(symbol, index).is_some() {
                return Err(CspError::InvariantViolation(format!(
                    "alphabet symbol '{}' appears more than once",
                    symbol
                )));
            }
        }

        let string_len = match targets.first() {
            Some(first) => first.chars().count(),
            None => {
                return Err(CspError::InvariantViolation(
                    "at least one target string is required".to_string(),
                ))
            }
        };
        if string_len == 0 {
            return Err(CspError::InvariantViolation(
                "target strings cannot be empty".to_string(),
            ));
        }

        for target in &targets {
            let len = target.chars().count();
            if len != string_len {
                return Err(CspError::InvariantViolation(format!(
                    "target string \"{}\" has length {} but expected {}",
                    target, len, string_len
                )));
            }
            for symbol in target.chars() {
                if !inverse_alphabet.contains_key(&symbol) {
                    return Err(CspError::InvariantViolation(format!(
                        "target string \"{}\" contains symbol '{}' which is not in the alphabet",
                        target, symbol
                    )));
                }
            }
        }

        Ok(Self {
            alphabet,
            inverse_alphabet,
            targets,
            string_len,
        })
    }

    /// Loads an instance from a file at the given path.
    ///
    /// See [`ProblemInstance::from_reader`] for the expected format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses an instance from the standard text format:
    ///
    /// - line 1: alphabet size `L`
    /// - line 2: number of target strings `N`
    /// - line 3: string length `S`
    /// - next `L` lines: one alphabet symbol each
    /// - remaining non-blank lines: the `N` target strings, each of length `S`
    ///
    /// # Errors
    ///
    /// Returns [`CspError::InputFormat`] for malformed headers or the wrong
    /// number of symbols or strings, and [`CspError::InvariantViolation`]
    /// when a target string's length differs from the declared `S`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let alphabet_len = parse_header(&mut lines, "alphabet size")?;
        let num_targets = parse_header(&mut lines, "number of target strings")?;
        let string_len = parse_header(&mut lines, "string length")?;

        let mut alphabet = Vec::with_capacity(alphabet_len);
        for index in 0..alphabet_len {
            let line = lines.next().transpose()?.ok_or_else(|| {
                CspError::InputFormat(format!(
                    "expected {} alphabet symbols but the file ends after {}",
                    alphabet_len, index
                ))
            })?;
            let symbol = line.trim().chars().next().ok_or_else(|| {
                CspError::InputFormat(format!("alphabet line {} is blank", index + 1))
            })?;
            alphabet.push(symbol);
        }

        let mut targets = Vec::with_capacity(num_targets);
        for line in lines {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let len = trimmed.chars().count();
            if len != string_len {
                return Err(CspError::InvariantViolation(format!(
                    "target string \"{}\" has length {} but the header declares {}",
                    trimmed, len, string_len
                )));
            }
            targets.push(trimmed.to_string());
        }

        if targets.len() != num_targets {
            return Err(CspError::InputFormat(format!(
                "header declares {} target strings but the file contains {}",
                num_targets,
                targets.len()
            )));
        }

        let instance = Self::new(alphabet, targets)?;
        debug!(
            alphabet_len = instance.alphabet_len(),
            num_targets = instance.num_targets(),
            string_len = instance.string_len(),
            "problem instance loaded"
        );
        Ok(instance)
    }

    /// The ordered alphabet the solution string is built from.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// The target strings the solution is scored against.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Number of symbols in the alphabet (`L`).
    pub fn alphabet_len(&self) -> usize {
        self.alphabet.len()
    }

    /// Number of target strings (`N`).
    pub fn num_targets(&self) -> usize {
        self.targets.len()
    }

    /// Length of every target string (`S`).
    pub fn string_len(&self) -> usize {
        self.string_len
    }

    /// Maps an alphabet symbol back to its index, if it is part of the alphabet.
    pub fn symbol_index(&self, symbol: char) -> Option<usize> {
        self.inverse_alphabet.get(&symbol).copied()
    }
}

fn parse_header<I>(lines: &mut I, field: &str) -> Result<usize>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let line = lines
        .next()
        .transpose()?
        .ok_or_else(|| CspError::InputFormat(format!("missing header line for {}", field)))?;
    line.trim()
        .parse::<usize>()
        .map_err(|_| CspError::InputFormat(format!("{} is not a number: \"{}\"", field, line.trim())))
}
