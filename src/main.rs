//! pagesim - replay a reference string through a page replacement policy
//! and print the per-step result table.

use anyhow::{bail, Context, Result};
use clap::Parser as ClapParser;
use std::path::PathBuf;

use pagesim::{
    load_reference_file, parse_reference_string, run, PageId, PolicyKind, RunStats,
    SimulationConfig, StepOutcome, DEFAULT_FRAME_COUNT,
};

const COLUMN_WIDTH: usize = 13;

/// Page replacement simulator
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Replacement policy: fifo, recency, lru or opt
    #[arg(short, long, default_value = "fifo")]
    policy: PolicyKind,

    /// Number of frames in the resident set
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
    frames: usize,

    /// Read the reference string from a file instead of the arguments
    #[arg(long)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Page references, separated by spaces or commas
    pages: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let sequence = match &args.file {
        Some(path) => load_reference_file(path)
            .with_context(|| format!("Failed to read reference string from {}", path.display()))?,
        None => parse_reference_string(&args.pages.join(" ")),
    };
    if sequence.is_empty() {
        bail!("No page references given");
    }

    let config = SimulationConfig::new(args.policy).with_capacity(args.frames);
    log::info!(
        "Running {} with {} frames over {} references",
        config.kind,
        config.capacity,
        sequence.len()
    );

    let outcomes = run(&config, &sequence).context("Simulation failed")?;

    print_table(&outcomes);
    println!();
    println!("{}", RunStats::from_outcomes(&outcomes));

    Ok(())
}

fn print_table(outcomes: &[StepOutcome<PageId>]) {
    let headers = ["Page", "Page Fault", "Eviction", "Replacement"];
    let rule = format!("+{}", format!("{}+", "-".repeat(COLUMN_WIDTH + 2)).repeat(headers.len()));

    println!("{}", rule);
    print_row(&headers.map(String::from));
    println!("{}", rule);
    for outcome in outcomes {
        print_row(&[
            outcome.page.to_string(),
            outcome.fault_marker().to_string(),
            u8::from(outcome.eviction).to_string(),
            u8::from(outcome.replacement).to_string(),
        ]);
    }
    println!("{}", rule);
}

fn print_row(cells: &[String; 4]) {
    let mut line = String::from("|");
    for cell in cells {
        line.push_str(&format!(" {:<width$} |", cell, width = COLUMN_WIDTH));
    }
    println!("{}", line);
}
