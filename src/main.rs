use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use antcsp::{Algorithm, ProblemInstance, Solver, SolverConfig};

/// Ant colony optimization solver for the closest string problem.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File location of the instance to use in the problem
    #[arg(short, long)]
    instance: PathBuf,

    /// Number of ants to be used in the colony
    #[arg(short, long, default_value_t = 20)]
    numants: usize,

    /// Rho value used in pheromone evaporation
    #[arg(short, long, default_value_t = 0.0003)]
    rho: f64,

    /// Seed value used in the random number generation
    #[arg(short, long, default_value_t = 1234)]
    seed: u64,

    /// Maximum number of iterations to be run for the solution
    #[arg(short, long, default_value_t = 1000)]
    maxiter: usize,

    /// ACO algorithm to run along with the solution
    #[arg(short, long, value_enum, default_value = "elitist")]
    algorithm: CliAlgorithm,

    /// Exponent on the heuristic counts (elitist strategy)
    #[arg(long)]
    alpha: Option<f64>,

    /// Tunable loaded alongside alpha and epsilon (elitist strategy)
    #[arg(long)]
    beta: Option<f64>,

    /// Scale of the best-path reinforcement (elitist strategy)
    #[arg(long)]
    epsilon: Option<f64>,

    /// Whether or not to use local search
    #[arg(short, long)]
    localsearch: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliAlgorithm {
    Elitist,
    Minmax,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(algorithm: CliAlgorithm) -> Self {
        match algorithm {
            CliAlgorithm::Elitist => Algorithm::Elitist,
            CliAlgorithm::Minmax => Algorithm::MinMax,
        }
    }
}

fn run(args: Args) -> antcsp::Result<()> {
    let instance = ProblemInstance::from_path(&args.instance)?;

    let mut builder = SolverConfig::builder()
        .algorithm(args.algorithm.into())
        .num_ants(args.numants)
        .rho(args.rho)
        .seed(args.seed)
        .max_iter(args.maxiter)
        .local_search(args.localsearch);
    if let Some(alpha) = args.alpha {
        builder = builder.alpha(alpha);
    }
    if let Some(beta) = args.beta {
        builder = builder.beta(beta);
    }
    if let Some(epsilon) = args.epsilon {
        builder = builder.epsilon(epsilon);
    }
    let config = builder.build()?;

    let mut solver = Solver::new(instance, config);
    let outcome = solver.solve()?;

    println!("Solution: {}", outcome.solution);
    println!(
        "Score: {} Min: {} Max: {}",
        outcome.score, outcome.min_distance, outcome.max_distance
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
