// SPDX-License-Identifier: PMPL-1.0-or-later

//! # Wattplan CLI
//!
//! Offline interface to the energy estimation engine: run a plan from a
//! JSON file against the measurement tables, or inspect the loaded tables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use wattplan_engine::{simulate, SimulationReport, SimulationRequest};
use wattplan_store::{load_store, MeasurementStore, TablePaths};

#[derive(Parser)]
#[command(name = "wattplan")]
#[command(about = "Mobile energy drain estimation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the measurement CSV exports
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate energy for a plan read from a JSON file
    Simulate {
        /// Plan file (JSON simulation request)
        plan: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List loaded scenario keys
    Scenarios {
        /// Only keys containing this substring
        #[arg(long)]
        contains: Option<String>,
    },

    /// List the device battery/screen table
    Devices,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let store = load_tables(&cli.data_dir)?;

    match cli.command {
        Commands::Simulate {
            plan,
            format,
            output,
        } => {
            info!("Simulating plan: {}", plan.display());
            let request = read_plan(&plan)?;
            let report = simulate(&store, &request)
                .with_context(|| format!("invalid plan {}", plan.display()))?;
            emit_output(&report, &format, output.as_deref())?;
        }

        Commands::Scenarios { contains } => {
            for key in store.scenario_keys() {
                if let Some(ref needle) = contains {
                    if !key.contains(needle.as_str()) {
                        continue;
                    }
                }
                println!("{}", key);
            }
        }

        Commands::Devices => {
            for spec in store.devices() {
                println!(
                    "{}  {:.2} Wh  {:.1} in",
                    spec.name, spec.battery_wh, spec.screen_in
                );
            }
        }
    }

    Ok(())
}

fn load_tables(data_dir: &Path) -> Result<MeasurementStore> {
    let paths = TablePaths::in_dir(data_dir);
    let store = load_store(&paths)
        .with_context(|| format!("loading tables from {}", data_dir.display()))?;
    Ok(store)
}

fn read_plan(path: &Path) -> Result<SimulationRequest> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let request =
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(request)
}

/// Emit a report in the requested format
fn emit_output(report: &SimulationReport, format: &str, output: Option<&Path>) -> Result<()> {
    let text = match format {
        "json" => serde_json::to_string_pretty(report)?,
        "text" => {
            print_report_text(report);
            return Ok(());
        }
        other => {
            eprintln!("Unsupported format: {}", other);
            return Ok(());
        }
    };

    match output {
        Some(path) => {
            fs::write(path, &text)?;
            eprintln!("Output written to: {}", path.display());
        }
        None => {
            println!("{}", text);
        }
    }

    Ok(())
}

fn print_report_text(report: &SimulationReport) {
    println!("\n--- Plan estimate ---");
    println!("Activities:     {}", report.activities.len());
    println!("Total energy:   {:.3} Wh", report.total_energy.0);
    println!("Radio share:    {:.3} Wh", report.total_rf_energy.0);
    println!("Battery drain:  {:.1} %", report.battery_percent);
    println!(
        "CO2 range:      {:.3} - {:.3} g",
        report.co2_min.0, report.co2_max.0
    );

    let unmatched: Vec<_> = report
        .activities
        .iter()
        .filter(|entry| entry.fallback)
        .collect();
    if !unmatched.is_empty() {
        println!("\nNo measured scenario for:");
        for entry in &unmatched {
            println!("  - {} ({} min)", entry.activity.name, entry.activity.duration);
        }
    }
}
