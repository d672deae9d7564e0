use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use compseg_io::read_segments_csv;
use compseg_segment::merge_segments;

use super::cli::DEFAULT_OUT;
use crate::input::{load_sequence, resolve_config, write_records};
use crate::progress::with_progress;

pub fn run_merge(matches: &ArgMatches) -> Result<()> {
    let segments_path = matches
        .get_one::<String>("segments")
        .context("A path to a segments file is required.")?;
    let sequence_path = matches
        .get_one::<String>("sequence")
        .context("A path to the input sequence is required.")?;

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);
    let gzip = output.ends_with(".gz");

    let config = resolve_config(matches)?;
    let segments = read_segments_csv(segments_path)
        .with_context(|| format!("Failed to read segments from {}", segments_path))?;
    let sequence = load_sequence(Path::new(sequence_path), matches)?;

    let merged = with_progress("merging", |progress| {
        merge_segments(&segments, &sequence, &config, progress)
    })?;
    write_records(&merged, Path::new(output), gzip)?;

    Ok(())
}
