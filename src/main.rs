//! Payrun CLI - batch payroll calculation tool.
//!
//! Imports a payroll CSV, derives gross/net/tax per employee, exports the
//! computed records to a CSV file, and optionally echoes per-employee
//! summary blocks to the console.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use payrun_engine::export::write_pay_records;
use payrun_engine::import::import_pay_records;

/// Payrun - batch payroll calculation tool
#[derive(Parser, Debug)]
#[command(name = "payrun")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the payroll CSV to import
    input: PathBuf,

    /// Path of the CSV export; defaults to a timestamped file name in the
    /// current directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also print each employee's summary block to the console
    #[arg(long)]
    console: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let records = import_pay_records(&cli.input)
        .with_context(|| format!("importing {}", cli.input.display()))?;

    let output = cli.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}-records.csv",
            Utc::now().format("%Y%m%dT%H%M%SZ")
        ))
    });

    write_pay_records(&output, &records)
        .with_context(|| format!("exporting {}", output.display()))?;

    if cli.console {
        for record in &records {
            println!("{}", record.details());
        }
    }

    Ok(())
}
