use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_salesman::ga::GaConfig;
use u_salesman::tabu::TabuConfig;
use u_salesman::{DistanceMatrix, GeneticFinder, Path, PathFinder, TabuFinder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    /// Generational genetic algorithm.
    Genetic,
    /// Multi-worker tabu search.
    Tabu,
}

#[derive(Parser)]
#[command(
    name = "u-salesman",
    version,
    about = "Find a short Hamiltonian cycle through a distance matrix",
    after_help = "Only INPUT is required. --engine, --seed, --workers and --iterations \
                  are tuning options; when omitted the engine defaults apply \
                  (genetic: 200 individuals, 100 generations, 5 threads; \
                  tabu: 1000 iterations over 5 workers)."
)]
struct Cli {
    /// Whitespace-separated square distance matrix, one row per line.
    input: PathBuf,

    /// Also write the results to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Search engine to run.
    #[arg(short, long, value_enum, default_value_t = EngineKind::Genetic)]
    engine: EngineKind,

    /// Random seed; omit for a fresh seed on every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (breeding threads or tabu workers).
    #[arg(short, long)]
    workers: Option<usize>,

    /// Generations (genetic) or total iterations (tabu).
    #[arg(short, long)]
    iterations: Option<usize>,
}

fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn genetic_config(cli: &Cli) -> GaConfig {
    let mut config = GaConfig::default();
    if let Some(n) = cli.workers {
        config = config.with_workers(n);
    }
    if let Some(n) = cli.iterations {
        config = config.with_max_generations(n);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config
}

fn tabu_config(cli: &Cli) -> TabuConfig {
    let mut config = TabuConfig::default();
    if let Some(n) = cli.workers {
        config = config.with_workers(n);
    }
    if let Some(n) = cli.iterations {
        config = config.with_max_iterations(n);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config
}

fn solve<F: PathFinder>(finder: &F) -> Result<(Path, u64)> {
    let path = finder.find_best_path()?;
    let length = finder.path_length(&path);
    Ok((path, length))
}

fn main() -> Result<()> {
    enable_tracing();
    let cli = Cli::parse();

    let matrix = DistanceMatrix::from_file(&cli.input)
        .with_context(|| format!("loading distance matrix from {}", cli.input.display()))?;
    let matrix = Arc::new(matrix);
    info!(nodes = matrix.len(), engine = ?cli.engine, "matrix loaded");

    let started = Instant::now();
    let (path, length) = match cli.engine {
        EngineKind::Genetic => solve(&GeneticFinder::load(matrix, genetic_config(&cli))?)?,
        EngineKind::Tabu => solve(&TabuFinder::load(matrix, tabu_config(&cli))?)?,
    };
    let elapsed = started.elapsed();

    let mut report = String::new();
    writeln!(report, "{path}")?;
    writeln!(report, "{length}")?;
    writeln!(report, "{}", elapsed.as_millis())?;

    print!("{report}");
    if let Some(output) = &cli.output {
        fs::write(output, &report)
            .with_context(|| format!("writing results to {}", output.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_option_is_documented() {
        let cmd = Cli::command();
        for id in ["input", "output", "engine", "seed", "workers", "iterations"] {
            let arg = cmd
                .get_arguments()
                .find(|a| a.get_id() == id)
                .unwrap_or_else(|| panic!("missing argument {id}"));
            assert!(arg.get_help().is_some(), "argument {id} has no help text");
        }
    }

    #[test]
    fn test_input_only_uses_engine_defaults() {
        let cli = Cli::try_parse_from(["u-salesman", "matrix.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("matrix.txt"));
        assert_eq!(cli.engine, EngineKind::Genetic);
        assert!(cli.output.is_none());

        let ga = genetic_config(&cli);
        let defaults = GaConfig::default();
        assert_eq!(ga.population_size, defaults.population_size);
        assert_eq!(ga.max_generations, defaults.max_generations);
        assert_eq!(ga.workers, defaults.workers);
        assert!(ga.seed.is_none());

        let tabu = tabu_config(&cli);
        assert_eq!(tabu.max_iterations, TabuConfig::default().max_iterations);
    }

    #[test]
    fn test_tuning_options_reach_configs() {
        let cli = Cli::try_parse_from([
            "u-salesman",
            "matrix.txt",
            "--engine",
            "tabu",
            "--seed",
            "9",
            "--workers",
            "3",
            "--iterations",
            "60",
            "--output",
            "out.txt",
        ])
        .unwrap();
        assert_eq!(cli.engine, EngineKind::Tabu);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));

        let tabu = tabu_config(&cli);
        assert_eq!(tabu.workers, 3);
        assert_eq!(tabu.max_iterations, 60);
        assert_eq!(tabu.seed, Some(9));

        let ga = genetic_config(&cli);
        assert_eq!(ga.workers, 3);
        assert_eq!(ga.max_generations, 60);
    }
}
