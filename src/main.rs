use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use timesheet_deductions::api::{AppState, create_router};
use timesheet_deductions::config::ConfigLoader;
use timesheet_deductions::models::{DeductionResult, DeductionSummary};
use timesheet_deductions::pipeline::{TEXT_EXCERPT_CHARS, TimesheetPipeline};
use timesheet_deductions::report::{REPORT_COLUMNS, format_rows};

#[derive(Parser, Debug)]
#[command(name = "timesheet-deductions")]
#[command(version, about = "Salary deductions for employees who worked under a weekly hours threshold", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Directory containing deductions.yaml (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },

    /// Compute deductions for a timesheet PDF and write the report
    Calculate {
        /// Input timesheet PDF
        input: PathBuf,

        /// Threshold hours (default from configuration)
        #[arg(short, long)]
        threshold: Option<u32>,

        /// Output PDF path (default: configured report file name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory containing deductions.yaml (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, bind } => serve(config.as_deref(), bind).await,
        Commands::Calculate {
            input,
            threshold,
            output,
            config,
        } => calculate(&input, threshold, output, config.as_deref()),
    }
}

fn load_config(dir: Option<&Path>) -> Result<ConfigLoader> {
    match dir {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("Failed to load configuration from {}", dir.display())),
        None => Ok(ConfigLoader::default()),
    }
}

async fn serve(config: Option<&Path>, bind: SocketAddr) -> Result<()> {
    let pipeline = TimesheetPipeline::new(load_config(config)?)?;
    let router = create_router(AppState::new(pipeline));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!(address = %bind, "Listening");

    axum::serve(listener, router).await.context("Server error")?;
    Ok(())
}

fn calculate(
    input: &Path,
    threshold: Option<u32>,
    output: Option<PathBuf>,
    config: Option<&Path>,
) -> Result<()> {
    let pipeline = TimesheetPipeline::new(load_config(config)?)?;
    let document =
        fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let evaluation = pipeline.evaluate(&document, threshold)?;

    println!("Extracted text (first {} characters):", TEXT_EXCERPT_CHARS);
    println!("{}", evaluation.text_excerpt);
    println!();
    println!(
        "Lines read: {}, accepted: {}, rejected: {}",
        evaluation.diagnostics.total_lines,
        evaluation.diagnostics.accepted,
        evaluation.diagnostics.rejected.len()
    );
    for rejected in &evaluation.diagnostics.rejected {
        println!("  skipped {:?}: {}", rejected.line, rejected.reason);
    }
    println!("Threshold hours: {}", evaluation.threshold_hours);
    println!();
    print_table(&evaluation.results)?;

    let report = pipeline.render(&evaluation.results)?;
    let output = output.unwrap_or_else(|| PathBuf::from(pipeline.config().report_file_name()));
    fs::write(&output, report.as_bytes())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(
        path = %output.display(),
        pages = report.page_count(),
        bytes = report.len(),
        "Report written"
    );
    Ok(())
}

fn print_table(results: &[DeductionResult]) -> Result<()> {
    let rows = format_rows(results);
    let mut widths = REPORT_COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.len());
        }
    }

    let line = |cells: [&str; 6]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
    };
    println!("{}", line(REPORT_COLUMNS));
    for row in &rows {
        println!("{}", line(row.cells()));
    }

    let summary = DeductionSummary::from_results(results)?;
    println!();
    println!(
        "{} of {} employees below threshold, total deduction {}",
        summary.employees_with_deduction, summary.employees, summary.total_deduction
    );
    Ok(())
}
