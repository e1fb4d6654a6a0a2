use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use auxbib::{filter_bibliography_internal, FilterOptions, OutputTarget};

/// Find citekeys from the LaTeX aux file and filter records matching these from a BibTeX database
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// BibTeX database filename
    database: PathBuf,
    /// LaTeX aux file to read (default: first match of *.aux)
    #[arg(short, long)]
    aux: Option<PathBuf>,
    /// Output for filtered BibTeX records (prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Verbose logging (progress and debug output on stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Configure logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let working_dir = env::current_dir().context("Failed to determine the working directory")?;
    let options = FilterOptions {
        database: args.database,
        aux: args.aux,
        working_dir,
        output: OutputTarget::from_path(args.output),
    };
    debug!("Filter options: {:?}", options);

    filter_bibliography_internal(&options)?;

    Ok(())
}
