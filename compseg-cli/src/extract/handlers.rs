use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use compseg_core::utils::extract_all_chromosomes;

pub fn run_extract(matches: &ArgMatches) -> Result<()> {
    let fasta = matches
        .get_one::<String>("fasta")
        .context("A path to a FASTA file is required.")?;
    let output = matches
        .get_one::<String>("output")
        .context("An output directory is required.")?;

    let written = extract_all_chromosomes(fasta, output)
        .with_context(|| format!("Failed to split {}", fasta))?;
    info!("Extracted {} chromosomes into {}", written.len(), output);

    Ok(())
}
