use results_plotter::pipeline::config::FIXED_REPORT_DIR;
use results_plotter::prelude::*;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    // Paths are fixed, relative to the working directory. See `PipelineConfig::fixed_paths`.
    let report = run_pipeline(&PipelineConfig::fixed_paths())?;

    println!("Plots generated successfully!");
    for path in &report.written {
        if path.starts_with(Path::new(FIXED_REPORT_DIR)) {
            println!("- {} (for the report build)", path.display());
        } else {
            println!("- {}", path.display());
        }
    }

    println!();
    println!("{}", format_summary_table(&report.summaries));
    Ok(())
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
