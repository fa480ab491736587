//! Photex CLI - PBR material maps from a single photo
//!
//! This binary decodes an input image, derives normal, roughness,
//! displacement, and ambient occlusion maps from it, and writes the result
//! as deterministic PNG files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use photex_cli::commands;

/// Photex - PBR material maps from a single photo
#[derive(Parser)]
#[command(name = "photex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate PBR material maps from an input image
    Generate {
        /// Path to the input image (PNG, JPEG, or WebP)
        #[arg(short, long)]
        input: String,

        /// Output directory for the generated maps
        #[arg(short, long, default_value = ".")]
        out: String,

        /// Comma-separated subset of maps to write
        /// (basecolor, normal, roughness, displacement, ao)
        #[arg(long)]
        maps: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the dimensions of an input image without generating maps
    Info {
        /// Path to the input image
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            out,
            maps,
            json,
        } => commands::generate::run(&input, &out, maps.as_deref(), json),
        Commands::Info { input, json } => commands::info::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
