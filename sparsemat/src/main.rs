use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sparsemat::{
    DuplicatePolicy, EngineConfig, Error, MatrixFile, MatrixInfo, MultiplyStrategy, Operation,
    Pipeline, SparseMatrix,
};

#[derive(Parser)]
#[command(name = "sparsemat")]
#[command(version, about = "Add, subtract and multiply sparse integer matrix files")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an operation to two matrix files
    Apply {
        /// Operation: 1/add, 2/subtract, 3/multiply
        operation: String,

        /// Left operand file
        lhs: PathBuf,

        /// Right operand file
        rhs: PathBuf,

        /// Result file
        #[arg(short, long, default_value = "result.txt")]
        output: PathBuf,

        /// Multiplication algorithm (indexed or dense)
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<MultiplyStrategy>,

        /// Treat repeated coordinates as a format error
        #[arg(long)]
        reject_duplicates: bool,
    },
    /// Show shape and fill of a matrix file
    Info {
        /// Matrix file
        path: PathBuf,
    },
}

fn parse_strategy(name: &str) -> Result<MultiplyStrategy, String> {
    MultiplyStrategy::from_name(name).ok_or_else(|| format!("unknown strategy `{name}`"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let mut cause = std::error::Error::source(&e);
            while let Some(err) = cause {
                eprintln!("  caused by: {err}");
                cause = err.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> sparsemat::Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Apply {
            operation,
            lhs,
            rhs,
            output,
            strategy,
            reject_duplicates,
        } => {
            let op: Operation = operation
                .parse()
                .map_err(|_| Error::UnknownOperation(operation.clone()))?;

            let mut config = config;
            if let Some(strategy) = strategy {
                config = config.with_multiply_strategy(strategy);
            }
            if reject_duplicates {
                config = config.with_duplicate_policy(DuplicatePolicy::Reject);
            }

            let summary = Pipeline::new(config).run(op, &lhs, &rhs, &output)?;
            println!("{summary}");
        }
        Commands::Info { path } => {
            let matrix: SparseMatrix = MatrixFile::read(&path, &config.parse)?;
            println!("{}", MatrixInfo::of(&matrix));
        }
    }

    Ok(())
}
