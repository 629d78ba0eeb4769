//! sortviz CLI
//!
//! Interactive sorting visualizer, plus a headless trace mode.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use sortviz::error::AppError;
use sortviz::generator::ArrayGenerator;
use sortviz::logging::{LogConfig, LogTarget, init_logging};
use sortviz::report::{RunSummary, TraceReport, format_report, summarize_run};
use sortviz::tui;
use sortviz::types::{
    Algorithm, DEFAULT_FRAME_MS, DEFAULT_TRACE_BARS, DEFAULT_TUI_BARS, OutputFormat, RunConfig,
    TraceConfig,
};

#[derive(Parser)]
#[command(name = "sortviz")]
#[command(about = "Watch sorting algorithms run, one step per frame")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive visualizer (default)
    Run(RunArgs),

    /// Run algorithms headless and print step statistics
    Trace {
        /// Number of bars
        #[arg(short = 'n', long, default_value_t = DEFAULT_TRACE_BARS)]
        bars: usize,

        /// Only run this algorithm (default: all six)
        #[arg(short, long, value_enum)]
        algorithm: Option<AlgorithmArg>,

        /// Seed the array generator
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Number of bars
    #[arg(short = 'n', long, default_value_t = DEFAULT_TUI_BARS)]
    bars: usize,

    /// Algorithm to start with
    #[arg(short, long, value_enum, default_value = "selection")]
    algorithm: AlgorithmArg,

    /// Frame budget in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_MS)]
    frame_ms: u64,

    /// Seed the array generator
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            bars: DEFAULT_TUI_BARS,
            algorithm: AlgorithmArg::Selection,
            frame_ms: DEFAULT_FRAME_MS,
            seed: None,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum AlgorithmArg {
    Selection,
    Insertion,
    Bubble,
    Merge,
    Quick,
    Heap,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Selection => Algorithm::Selection,
            AlgorithmArg::Insertion => Algorithm::Insertion,
            AlgorithmArg::Bubble => Algorithm::Bubble,
            AlgorithmArg::Merge => Algorithm::Merge,
            AlgorithmArg::Quick => Algorithm::Quick,
            AlgorithmArg::Heap => Algorithm::Heap,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => cmd_run(args, cli.verbose, cli.log_file),
        Commands::Trace {
            bars,
            algorithm,
            seed,
            format,
        } => {
            let config = TraceConfig {
                bars,
                algorithms: match algorithm {
                    Some(a) => vec![a.into()],
                    None => Algorithm::ALL.to_vec(),
                },
                seed,
                format: format.into(),
            };
            cmd_trace(&config, cli.verbose, cli.log_file)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_run(args: RunArgs, verbose: u8, log_file: Option<PathBuf>) -> Result<(), AppError> {
    // The alternate screen owns stdout/stderr; only a file can take logs.
    let log = LogConfig::from_verbosity(verbose).with_target(log_file, LogTarget::Off);
    init_logging(&log)?;

    let config = RunConfig {
        bars: args.bars,
        algorithm: args.algorithm.into(),
        frame: Duration::from_millis(args.frame_ms),
        seed: args.seed,
    };

    tui::run::run(&config)
}

fn cmd_trace(config: &TraceConfig, verbose: u8, log_file: Option<PathBuf>) -> Result<(), AppError> {
    let log = LogConfig::from_verbosity(verbose).with_target(log_file, LogTarget::Stderr);
    init_logging(&log)?;

    let values = ArrayGenerator::new(config.bars, config.seed).generate();

    let runs = if config.format == OutputFormat::Human {
        trace_with_progress(&config.algorithms, &values)
    } else {
        trace_quiet(&config.algorithms, &values)
    };

    let report = TraceReport {
        seed: config.seed,
        bars: values.len(),
        runs,
    };

    print!("{}", format_report(&report, config.format));
    Ok(())
}

// ============================================================================
// TRACE HELPERS
// ============================================================================

fn progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message(msg.to_string());
    pb
}

/// Run every algorithm on its own copy of `values`, with a progress bar.
fn trace_with_progress(algorithms: &[Algorithm], values: &[u32]) -> Vec<RunSummary> {
    let pb = progress_bar(algorithms.len() as u64, "Sorting...");

    let runs: Vec<_> = algorithms
        .par_iter()
        .progress_with(pb.clone())
        .map(|&algorithm| summarize_run(algorithm, values))
        .collect();

    pb.finish_and_clear();
    runs
}

/// Same as [`trace_with_progress`] without terminal output (for JSON).
fn trace_quiet(algorithms: &[Algorithm], values: &[u32]) -> Vec<RunSummary> {
    algorithms
        .par_iter()
        .map(|&algorithm| summarize_run(algorithm, values))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["sortviz"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn trace_flags_parse() {
        let cli = Cli::try_parse_from([
            "sortviz", "trace", "-n", "10", "-a", "quick", "--seed", "3", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Trace {
                bars,
                algorithm,
                seed,
                format,
            }) => {
                assert_eq!(bars, 10);
                assert_eq!(algorithm.map(Algorithm::from), Some(Algorithm::Quick));
                assert_eq!(seed, Some(3));
                assert_eq!(OutputFormat::from(format), OutputFormat::Json);
            }
            _ => panic!("Expected Trace command"),
        }
    }

    #[test]
    fn trace_runs_keep_requested_order() {
        let values = ArrayGenerator::new(40, Some(11)).generate();
        let runs = trace_quiet(&Algorithm::ALL, &values);
        let order: Vec<_> = runs.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
        assert!(runs.iter().all(|r| r.sorted && r.permutation));
    }
}
