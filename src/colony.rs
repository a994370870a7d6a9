//! # Ant and Colony
//!
//! An [`Ant`] is one candidate solution: it samples a string from the
//! current probability matrix by independent roulette-wheel selection per
//! position and scores it against the target strings. A [`Colony`] is the
//! generation of ants evaluated in one iteration.
//!
//! Ants only ever read the shared probability matrix and write their own
//! fields, so a colony can evaluate its ants in parallel with no locking.

use rayon::prelude::*;

use crate::error::{CspError, Result};
use crate::instance::ProblemInstance;
use crate::matrix::ProbabilityMatrix;
use crate::rng::RandomNumberGenerator;

/// Counts the positions at which two equal-length strings differ.
///
/// # Errors
///
/// Returns [`CspError::InvariantViolation`] if the strings differ in
/// length; distances are never computed over truncated or padded strings.
///
/// # Examples
///
/// ```rust
/// use antcsp::colony::hamming_distance;
///
/// assert_eq!(hamming_distance("aabc", "abbc").unwrap(), 1);
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Result<u64> {
    if a.chars().count() != b.chars().count() {
        return Err(CspError::InvariantViolation(format!(
            "cannot compute the Hamming distance between strings of different lengths ({} and {})",
            a.chars().count(),
            b.chars().count()
        )));
    }
    Ok(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() as u64)
}

/// One candidate solution: the chosen path of alphabet indices, the string
/// it renders to, and its scores against the target set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ant {
    path: Vec<usize>,
    solution: String,
    score: u64,
    min_distance: u64,
    max_distance: u64,
}

impl Ant {
    /// Samples a solution from the probability matrix.
    ///
    /// For each position, one uniform draw picks a symbol by roulette-wheel
    /// selection over that row: the smallest index whose cumulative
    /// probability exceeds the draw wins. Positions are sampled
    /// independently; there is no coupling or backtracking between them.
    pub fn construct(
        probabilities: &ProbabilityMatrix,
        alphabet: &[char],
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let positions = probabilities.positions();
        let draws = rng.fetch_uniform(0.0, 1.0, positions);

        let path: Vec<usize> = draws
            .iter()
            .enumerate()
            .map(|(position, &draw)| roulette(probabilities.row(position), draw))
            .collect();
        let solution: String = path.iter().map(|&index| alphabet[index]).collect();

        Self {
            path,
            solution,
            score: 0,
            min_distance: 0,
            max_distance: 0,
        }
    }

    /// Scores the solution against every target string, populating the
    /// total score and the minimum and maximum Hamming distances.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::InvariantViolation`] if any target's length
    /// differs from the solution's. The instance invariants rule this out,
    /// but it is checked rather than assumed.
    pub fn evaluate(&mut self, targets: &[String]) -> Result<()> {
        if targets.is_empty() {
            return Err(CspError::InvariantViolation(
                "cannot evaluate an ant against an empty target set".to_string(),
            ));
        }

        let mut score = 0;
        let mut min_distance = u64::MAX;
        let mut max_distance = 0;
        for target in targets {
            let distance = hamming_distance(&self.solution, target)?;
            score += distance;
            min_distance = min_distance.min(distance);
            max_distance = max_distance.max(distance);
        }

        self.score = score;
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        Ok(())
    }

    /// The chosen alphabet index per position.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The sampled solution string.
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Sum of Hamming distances to all targets.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Smallest Hamming distance to any target.
    pub fn min_distance(&self) -> u64 {
        self.min_distance
    }

    /// Largest Hamming distance to any target.
    pub fn max_distance(&self) -> u64 {
        self.max_distance
    }
}

fn roulette(row: &[f64], draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, probability) in row.iter().enumerate() {
        cumulative += probability;
        if draw < cumulative {
            return index;
        }
    }
    // Floating-point round-off can leave the cumulative sum a hair under
    // the draw; the last symbol takes the remainder.
    row.len() - 1
}

/// The generation of ants evaluated in one iteration.
#[derive(Debug, Clone)]
pub struct Colony {
    ants: Vec<Ant>,
}

impl Colony {
    /// Samples and evaluates `num_ants` ants against the instance.
    ///
    /// Each ant gets its own generator spawned from the master one, so the
    /// outcome is reproducible for a given seed whether the ants run
    /// sequentially or, at or above `parallel_threshold`, across rayon
    /// workers. The probability matrix is only read here, never written.
    pub fn evaluate(
        probabilities: &ProbabilityMatrix,
        instance: &ProblemInstance,
        num_ants: usize,
        rng: &mut RandomNumberGenerator,
        parallel_threshold: usize,
    ) -> Result<Self> {
        let mut worker_rngs: Vec<RandomNumberGenerator> =
            (0..num_ants).map(|_| rng.spawn()).collect();

        let build = |worker: &mut RandomNumberGenerator| -> Result<Ant> {
            let mut ant = Ant::construct(probabilities, instance.alphabet(), worker);
            ant.evaluate(instance.targets())?;
            Ok(ant)
        };

        let ants: Result<Vec<Ant>> = if num_ants >= parallel_threshold {
            worker_rngs.par_iter_mut().map(build).collect()
        } else {
            worker_rngs.iter_mut().map(build).collect()
        };

        Ok(Self { ants: ants? })
    }

    /// All ants of this generation.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Selects the best ant under the given comparator.
    ///
    /// Ties go to the earliest ant, so selection is deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`CspError::EmptyColony`] if the colony holds no ants.
    pub fn best_by<F>(&self, mut compare: F) -> Result<&Ant>
    where
        F: FnMut(&Ant, &Ant) -> std::cmp::Ordering,
    {
        self.ants
            .iter()
            .reduce(|best, ant| {
                if compare(ant, best) == std::cmp::Ordering::Less {
                    ant
                } else {
                    best
                }
            })
            .ok_or(CspError::EmptyColony)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::HeuristicPheromoneMatrix;

    fn forced_probabilities() -> (ProblemInstance, ProbabilityMatrix) {
        // Every target is 'a' at every position, so with alpha = 1 the
        // probability mass collapses onto 'a' and sampling is forced.
        let all_a = ProblemInstance::new(
            vec!['a', 'b', 'c'],
            vec!["aaa".to_string(), "aaa".to_string(), "aaa".to_string()],
        )
        .unwrap();
        let probabilities = HeuristicPheromoneMatrix::new(&all_a)
            .probabilities(1.0)
            .unwrap();
        (all_a, probabilities)
    }

    #[test]
    fn test_hamming_distance_counts_mismatches() {
        assert_eq!(hamming_distance("aabc", "abbc").unwrap(), 1);
        assert_eq!(hamming_distance("aaa", "aaa").unwrap(), 0);
        assert_eq!(hamming_distance("abc", "cba").unwrap(), 2);
    }

    #[test]
    fn test_hamming_distance_rejects_unequal_lengths() {
        let result = hamming_distance("abc", "abcd");
        assert!(matches!(result, Err(CspError::InvariantViolation(_))));
    }

    #[test]
    fn test_evaluate_aggregates_distances() {
        let (_, probabilities) = forced_probabilities();
        let mut rng = RandomNumberGenerator::from_seed(7);
        let mut ant = Ant::construct(&probabilities, &['a', 'b', 'c'], &mut rng);
        assert_eq!(ant.solution(), "aaa");

        let targets = vec!["aaa".to_string(), "aab".to_string(), "aba".to_string()];
        ant.evaluate(&targets).unwrap();

        assert_eq!(ant.score(), 2);
        assert_eq!(ant.min_distance(), 0);
        assert_eq!(ant.max_distance(), 1);
    }

    #[test]
    fn test_sampling_is_reproducible_for_a_fixed_seed() {
        let instance = ProblemInstance::new(
            vec!['a', 'b'],
            vec!["abab".to_string(), "baba".to_string()],
        )
        .unwrap();
        let probabilities = HeuristicPheromoneMatrix::new(&instance)
            .probabilities(1.0)
            .unwrap();

        let mut first = RandomNumberGenerator::from_seed(1234);
        let mut second = RandomNumberGenerator::from_seed(1234);

        let ant_a = Ant::construct(&probabilities, instance.alphabet(), &mut first);
        let ant_b = Ant::construct(&probabilities, instance.alphabet(), &mut second);

        assert_eq!(ant_a.path(), ant_b.path());
        assert_eq!(ant_a.solution(), ant_b.solution());
    }

    #[test]
    fn test_colony_best_is_deterministic() {
        let (instance, probabilities) = forced_probabilities();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let colony = Colony::evaluate(&probabilities, &instance, 5, &mut rng, 64).unwrap();

        let best = colony.best_by(|a, b| a.score().cmp(&b.score())).unwrap();
        assert_eq!(best.solution(), "aaa");
        assert_eq!(best.score(), 0);
    }

    #[test]
    fn test_parallel_and_sequential_colonies_agree() {
        let (instance, probabilities) = forced_probabilities();

        let mut sequential_rng = RandomNumberGenerator::from_seed(9);
        let mut parallel_rng = RandomNumberGenerator::from_seed(9);

        let sequential =
            Colony::evaluate(&probabilities, &instance, 8, &mut sequential_rng, 64).unwrap();
        let parallel =
            Colony::evaluate(&probabilities, &instance, 8, &mut parallel_rng, 1).unwrap();

        assert_eq!(sequential.ants(), parallel.ants());
    }
}
