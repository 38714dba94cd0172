//! FHIR STU3 CLI executable
//!
//! See the cli module documentation for usage.

use atrius_fhir_stu3::cli::{Args, run_cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    run_cli(args)
}
