// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! blast_design — CLI binary for the blast design kernel
//!
//! Takes the design form as JSON on stdin or as --json argument, runs the
//! parameter engine and layout generator, and prints one JSON document on stdout.
//! Logs go to stderr (`RUST_LOG=debug` for per-stage values).
//!
//! Usage:
//!   echo '{"bench_height":10,"hole_diameter":150,"explosive_density":1.2,"rock_density":2.6}' | blast_design design
//!   blast_design design --json '{...}' --config site.json --table
//!   blast_design sweep --json '{...}'

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use blast_core::optimization::RangeSweep;
use blast_core::{BlastConfig, BlastKernel, DesignInputs};

#[derive(Parser)]
#[command(name = "blast_design")]
#[command(version, about = "Surface blast-hole design from bench, rock and explosive inputs")]
struct Cli {
    /// Design form as JSON (read from stdin when omitted)
    #[arg(long, global = true)]
    json: Option<String>,

    /// BlastConfig JSON file; missing fields take their defaults
    #[arg(long, global = true, env = "BLAST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full design: parameters, advisory, pattern layout and hole profile
    Design {
        /// Print the parameter table to stderr as well
        #[arg(long)]
        table: bool,
    },
    /// Evaluate the design at the low, midpoint and high ends of every ranged formula
    Sweep,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let input = get_input(cli.json)?;
    let resolved = DesignInputs::from_json(&input).context("invalid design input")?;

    let output = match cli.command {
        Commands::Design { table } => {
            let design = BlastKernel::compute_resolved(&resolved, &config)?;
            if table {
                for row in design.result.summary() {
                    eprintln!("{:<24} {:>16}   {}", row.parameter, row.value, row.formula);
                }
            }
            serde_json::to_string_pretty(&design)?
        }
        Commands::Sweep => {
            let envelope = RangeSweep::envelope(&resolved.inputs, &config.powder_factor_ranges)?;
            serde_json::to_string_pretty(&envelope)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<BlastConfig> {
    match path {
        None => Ok(BlastConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Ok(BlastConfig::from_json(&text)?)
        }
    }
}

fn get_input(json: Option<String>) -> Result<String> {
    if let Some(json) = json {
        return Ok(json);
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading design input from stdin")?;
    Ok(input)
}
