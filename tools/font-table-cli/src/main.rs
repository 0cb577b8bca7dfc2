//! font-table - tool for legacy bitmap-font glyph tables
//!
//! # Commands
//!
//! - `font-table info <file>` - Summarize a font table
//! - `font-table dump <file>` - List every glyph (text or JSON)
//! - `font-table metrics <file> <text>` - Measure text in pixels
//! - `font-table check <file>` - Decode only, fail on a malformed table
//! - `font-table reencode <file>` - Decode and write the table back out
//! - `font-table build [font.toml]` - Build a table from a manifest
//!
//! Log output follows `RUST_LOG` (default `info`, `--verbose` for `debug`).

mod convert;
mod inspect;
mod manifest;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// font-table - inspect, re-encode and build glyph tables
#[derive(Parser)]
#[command(name = "font-table")]
#[command(about = "Inspect, re-encode and build legacy bitmap-font glyph tables")]
#[command(version)]
struct Cli {
    /// Verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a font table
    Info {
        /// Font table file
        input: PathBuf,
    },

    /// List every glyph in ascending code order
    Dump {
        /// Font table file
        input: PathBuf,

        /// Print JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },

    /// Measure text rendered with a font table
    Metrics {
        /// Font table file
        input: PathBuf,

        /// Text to measure (use \n for line breaks)
        text: String,
    },

    /// Decode a font table and report whether it is valid
    Check {
        /// Font table file
        input: PathBuf,
    },

    /// Decode a font table and encode it again
    Reencode {
        /// Font table file
        input: PathBuf,

        /// Output file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the reserved byte patterns found in shipped assets
        #[arg(long)]
        legacy_fill: bool,
    },

    /// Build a font table from a manifest
    Build {
        /// Path to font.toml manifest
        #[arg(default_value = "font.toml")]
        manifest: PathBuf,

        /// Output file (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info { input } => inspect::info(&input),
        Commands::Dump { input, json } => inspect::dump(&input, json),
        Commands::Metrics { input, text } => inspect::metrics(&input, &text),
        Commands::Check { input } => inspect::check(&input),
        Commands::Reencode {
            input,
            output,
            legacy_fill,
        } => {
            let output = output.unwrap_or_else(|| input.clone());
            convert::reencode(&input, &output, legacy_fill)
        }
        Commands::Build { manifest, output } => convert::build(&manifest, output.as_deref()),
    }
}
