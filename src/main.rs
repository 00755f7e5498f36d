use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info, warn};

use heightpath::{HeightMap, QueryOptions, QueryOrchestrator, SearchError};


/// Shortest climbs over a height map
///
/// Prints the steps from S to E, then the fewest steps from any 'a' cell to E.
/// A missing path prints -1.
#[derive(Parser)]
#[command(name = "heightpath", version)]
struct Cmd {
    /// Height map file, stdin when absent or "-"
    input: Option<PathBuf>,

    /// Search every candidate from scratch instead of reusing the first path
    #[arg(long)]
    no_reuse: bool,

    /// Run candidate queries in parallel
    #[arg(long)]
    parallel: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();

    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let text = read_input(cmd.input.as_ref())?;
    let grid: HeightMap = text.parse().context("failed to parse height map")?;
    info!(width = grid.width(), height = grid.height(), "height map loaded");

    let options = QueryOptions {
        reuse_paths: !cmd.no_reuse,
        parallel: cmd.parallel,
    };
    let report = QueryOrchestrator::new(&grid, options).report();

    println!("{}", steps_or_minus_one("start to target", report.fixed));
    println!("{}", steps_or_minus_one("lowest cells to target", report.best));
    Ok(())
}

fn steps_or_minus_one(what: &str, outcome: Result<usize, SearchError>) -> i64 {
    match outcome {
        Ok(steps) => steps as i64,
        Err(e) => {
            warn!(error = %e, "no path from {what}");
            -1
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
