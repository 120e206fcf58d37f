use argh::FromArgs;
use results_plotter::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: plot-results <results.csv> <out_dir>";

/// Render runtime (log-log) and operation-count charts from a benchmark results table
#[derive(FromArgs, Debug, PartialEq)]
pub struct Args {
    /// results table with columns algorithm,n,avg_time_ms,avg_ops
    #[argh(positional)]
    results: PathBuf,

    /// directory the charts are written to (created if missing)
    #[argh(positional)]
    out_dir: PathBuf,
}

/// Text to print when argument parsing stops the program early.
#[derive(Debug)]
struct EarlyExit {
    message: String,
    success: bool,
}

fn parse_args(command: &str, args: &[&str]) -> Result<Args, EarlyExit> {
    Args::from_args(&[command], args).map_err(|early_exit| match early_exit.status {
        // --help
        Ok(()) => EarlyExit {
            message: early_exit.output,
            success: true,
        },
        Err(()) => EarlyExit {
            message: format!("{}\n{}", early_exit.output.trim_end(), USAGE),
            success: false,
        },
    })
}

fn main() -> ExitCode {
    setup_tracing();

    let raw_args: Vec<String> = std::env::args().collect();
    let command = raw_args
        .first()
        .map(String::as_str)
        .unwrap_or("plot-results");
    let args: Vec<&str> = raw_args.iter().skip(1).map(String::as_str).collect();

    let args = match parse_args(command, &args) {
        Ok(args) => args,
        Err(early_exit) => {
            println!("{}", early_exit.message);
            return if early_exit.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    let config = PipelineConfig::path_configurable(args.results, args.out_dir);
    match run_pipeline(&config) {
        Ok(report) => {
            println!("{}", format_summary_table(&report.summaries));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
