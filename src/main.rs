use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use divsort::io::{create_progress_bar, prompt_path};
use divsort::{run_benchmark, FileSorter, ParallelProcessor, SortError, Strategy, DEFAULT_INPUTS};

#[derive(Parser, Debug)]
#[command(name = "divsort")]
#[command(about = "Factorization benchmark and file-extension sorter", long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable progress bars
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the divisors of each number, timing sequential and parallel runs
    Factorize {
        /// Positive integers to factorize (defaults to the reference workload)
        #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Execution strategy
        #[arg(short, long, value_enum, default_value_t = Strategy::Both)]
        strategy: Strategy,

        /// Number of worker threads (defaults to number of CPU cores)
        #[arg(short = 'j', long)]
        threads: Option<usize>,
    },

    /// Copy files from SOURCE into TARGET/<extension>/
    Sort {
        /// Source folder (prompted for when omitted)
        #[arg(value_name = "SOURCE")]
        source: Option<PathBuf>,

        /// Destination folder (prompted for when omitted)
        #[arg(value_name = "TARGET")]
        target: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 2)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Factorize {
            numbers,
            strategy,
            threads,
        } => factorize(numbers, strategy, threads),
        Command::Sort { source, target } => sort(source, target, args.quiet),
    }
}

fn factorize(numbers: Vec<i64>, strategy: Strategy, threads: Option<usize>) -> Result<()> {
    let inputs = if numbers.is_empty() {
        DEFAULT_INPUTS.to_vec()
    } else {
        numbers
    };

    if strategy != Strategy::Sequential {
        let workers = ParallelProcessor::new(threads).num_workers();
        println!("Using {} worker threads", workers);
    }

    let report = run_benchmark(&inputs, strategy, threads).context("Factorization failed")?;

    for (n, divisors) in report.inputs.iter().zip(&report.results) {
        println!("{}: {:?}", n, divisors);
    }

    for timing in &report.timings {
        println!("{:>10}: {:.2?}", timing.label, timing.elapsed);
    }
    if let Some(speedup) = report.speedup() {
        println!("Speedup: {:.2}x", speedup);
    }

    Ok(())
}

fn sort(source: Option<PathBuf>, target: Option<PathBuf>, quiet: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let source = match source {
        Some(path) => path,
        None => prompt_path(
            "Please enter a path to the source folder",
            &mut input,
            &mut output,
        )?,
    };
    let target = match target {
        Some(path) => path,
        None => prompt_path(
            "Please enter a path to the destination folder",
            &mut input,
            &mut output,
        )?,
    };

    let mut sorter = FileSorter::new(&source, &target);
    if !quiet && io::stderr().is_terminal() {
        sorter = sorter.with_progress(create_progress_bar(0, "files"));
    }

    // Sorting runs on its own worker thread; the main thread only waits.
    let outcome = std::thread::scope(|s| {
        std::thread::Builder::new()
            .name("divsort-sorter".to_string())
            .spawn_scoped(s, || sorter.sort_files())
            .context("Failed to spawn sorter thread")?
            .join()
            .map_err(|_| anyhow::anyhow!("Sorter thread panicked"))
    })?;

    match outcome {
        Ok(summary) => {
            for (extension, count) in &summary.groups {
                debug!("{:?}: {} file(s)", extension, count);
            }
            info!("File copying completed successfully.");
            println!(
                "Copied {} file(s) from {} into {}",
                summary.files_copied,
                source.display(),
                target.display()
            );
            if summary.files_skipped > 0 {
                println!("Skipped {} file(s) already in place", summary.files_skipped);
            }
            Ok(())
        }
        Err(e @ (SortError::DirectoryNotFound(_) | SortError::NotADirectory(_))) => {
            error!("{}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
