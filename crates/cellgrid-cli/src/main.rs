//! Cellgrid CLI - run cell-edit scripts against an in-memory grid

use anyhow::{Context, Result};
use cellgrid::prelude::*;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(
    author,
    version,
    about = "Run cell-edit scripts against an in-memory grid"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a cell script and print requested values
    Run {
        /// Script file, or "-" for stdin. Lines: `A1 = raw text` commits
        /// an edit, `print A1` prints a cell's value, `#` starts a comment
        script: PathBuf,

        /// Number of grid columns
        #[arg(long, default_value_t = cellgrid::DEFAULT_COLUMNS)]
        columns: u16,

        /// Number of grid rows
        #[arg(long, default_value_t = cellgrid::DEFAULT_ROWS)]
        rows: u32,
    },

    /// Execute a cell script, then dump every written cell
    Grid {
        /// Script file, or "-" for stdin
        script: PathBuf,

        /// Number of grid columns
        #[arg(long, default_value_t = cellgrid::DEFAULT_COLUMNS)]
        columns: u16,

        /// Number of grid rows
        #[arg(long, default_value_t = cellgrid::DEFAULT_ROWS)]
        rows: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            script,
            columns,
            rows,
        } => {
            let mut sheet = Sheet::with_dims(columns, rows);
            run_script(&mut sheet, &script)
        }
        Commands::Grid {
            script,
            columns,
            rows,
        } => {
            let mut sheet = Sheet::with_dims(columns, rows);
            run_script(&mut sheet, &script)?;
            dump_grid(&sheet);
            Ok(())
        }
    }
}

/// Execute a script line by line against the sheet
///
/// Rejected edits (circular references) are reported and skipped, the way
/// an interactive caller discards a refused edit; malformed script lines
/// abort with an error.
fn run_script(sheet: &mut Sheet, script: &PathBuf) -> Result<()> {
    let source = read_script(script)?;

    for (idx, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(target) = line.strip_prefix("print ") {
            let addr = parse_addr(target.trim(), idx)?;
            println!("{}", sheet.read_value(addr));
            continue;
        }

        let (lhs, rhs) = line.split_once('=').with_context(|| {
            format!("line {}: expected `ADDR = text` or `print ADDR`", idx + 1)
        })?;
        let addr = parse_addr(lhs.trim(), idx)?;

        match sheet.propose_edit(addr, rhs.trim()) {
            Err(err @ Error::CircularReference(_)) => {
                eprintln!("line {}: edit discarded: {}", idx + 1, err);
            }
            other => other.with_context(|| format!("line {}: edit failed", idx + 1))?,
        }
    }

    Ok(())
}

/// Read the script source from a file or stdin ("-")
fn read_script(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read script '{}'", path.display()))
    }
}

/// Parse an A1-style address, attaching the script line number on failure
fn parse_addr(text: &str, idx: usize) -> Result<Address> {
    Address::parse(text)
        .with_context(|| format!("line {}: bad cell address '{}'", idx + 1, text))
}

/// Print every written cell as `ADDR: raw => value`, row-major
fn dump_grid(sheet: &Sheet) {
    for (addr, raw) in sheet.cells() {
        println!("{}: {} => {}", addr, raw, sheet.read_value(addr));
    }
}
