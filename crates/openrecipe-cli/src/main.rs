use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use openrecipe_core::{load_file, save_file, to_yaml_string};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "openrecipe")]
#[command(about = "Normalize Open Recipe Format files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a recipe file into its canonical form
    Normalize {
        /// Input recipe file (YAML)
        input: PathBuf,
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Suppress warnings
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Normalize {
            input,
            output,
            quiet,
        } => normalize_file(&input, output.as_deref(), quiet),
    }
}

fn normalize_file(input: &Path, output: Option<&Path>, quiet: bool) -> Result<()> {
    let normalized = load_file(input)?;

    if !quiet {
        for warning in &normalized.warnings {
            eprintln!("Warning: {warning}");
        }
    }

    match output {
        Some(path) => save_file(&normalized.recipe, path)?,
        None => print!("{}", to_yaml_string(&normalized.recipe)?),
    }
    Ok(())
}
