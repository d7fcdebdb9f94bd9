mod app;
mod cli;
mod color;
mod data;
mod plots;
mod state;
mod ui;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use cli::Args;
use data::loader::{scan_dir, Inventory};
use data::model::Figure;
use state::Mode;

const RULE: &str = "============================================================";

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mode = args.mode();

    println!("{RULE}");
    println!("Probe and TEB curves");
    println!("{RULE}");

    let dir = std::env::current_dir().context("resolving current directory")?;
    let Some(figures) = prepare_figures(&dir, mode)? else {
        return Ok(());
    };

    println!("\n{RULE}");
    println!("{} figure(s) ready", figures.len());
    println!("{RULE}");

    if figures.is_empty() {
        println!("Nothing to display.");
        return Ok(());
    }

    log::info!("opening {} figures in {:?} mode", figures.len(), mode);
    app::run(figures, mode).map_err(|e| anyhow!("figure window failed: {e}"))
}

/// Scan `dir` and build the figures of `mode`.
///
/// `None` when the directory holds no CSV file at all; guidance has been
/// printed and nothing should be shown.
fn prepare_figures(dir: &Path, mode: Mode) -> Result<Option<Vec<Figure>>> {
    let files = scan_dir(dir)?;
    if files.is_empty() {
        println!("\nNo CSV file found in the current directory.");
        println!("Run the simulator with the -s option first.");
        return Ok(None);
    }
    println!("\nTotal CSV files found: {}\n", files.len());

    let inventory = Inventory::from_paths(&files);
    if inventory.is_empty() {
        log::debug!("no file follows the sonde_ / TEB_ naming conventions");
    }
    let figures = match mode {
        Mode::Individual => {
            let mut figures = plots::probe::build(&inventory);
            figures.extend(plots::analysis::build(&inventory));
            figures
        }
        Mode::Comparison => plots::comparison::build(&inventory),
    };
    Ok(Some(figures))
}
