//! Epimorph CLI - Transform a scaled design matrix to disease parameters
//!
//! # Usage
//!
//! ```bash
//! epimorph design.csv disease.csv        # Transform a design matrix
//! epimorph design.csv disease.csv -f     # Over-write an existing output
//! ```

use clap::Parser;
use epimorph::{run, RunOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "epimorph")]
#[command(
    about = "Transform epidemiological design points into disease progression parameters",
    long_about = None
)]
struct Cli {
    /// Input design matrix (CSV with header row)
    input: PathBuf,

    /// Output disease matrix
    output: PathBuf,

    /// Force over-write of an existing output file
    #[arg(short, long)]
    force: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = run(&cli.input, &cli.output, RunOptions { force: cli.force });

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }

    eprintln!("✨ Done! See output at {}", cli.output.display());
}
