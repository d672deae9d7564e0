use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use compseg_io::{gc_segments_file, isochores_file, merged_segments_file, segments_file};
use compseg_isochore::{annotate_gc_content, gc_windows};
use compseg_segment::{merge_segments, segment_sequence};

use super::cli::{DEFAULT_STEP_SIZE, DEFAULT_WINDOW_SIZE};
use crate::input::{load_sequence, resolve_config, write_records};
use crate::progress::with_progress;

pub fn run_segment(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to an input sequence is required.")?;
    let output = matches
        .get_one::<String>("output")
        .context("An output directory is required.")?;
    let window = *matches
        .get_one::<usize>("window")
        .unwrap_or(&DEFAULT_WINDOW_SIZE);
    let step = *matches.get_one::<usize>("step").unwrap_or(&DEFAULT_STEP_SIZE);
    let gzip = matches.get_flag("gzip");

    let config = resolve_config(matches)?;
    let sequence = load_sequence(Path::new(input), matches)?;
    let bases = sequence.as_bytes();
    let out_dir = Path::new(output);

    let (m, w, l) = (
        config.min_segment_size,
        config.word_size,
        config.lookahead_size,
    );

    if !matches.get_flag("no-isochores") {
        info!("Isochore detection: window={}, step={}", window, step);
        let isochores = with_progress("isochores", |progress| {
            gc_windows(bases, window, step, progress)
        });
        write_records(&isochores, &isochores_file(out_dir, window, step, gzip), gzip)?;
    }

    info!(
        "Word size {}, minimum segment {} nucleotides, lookahead {} nucleotides",
        w,
        m * w,
        l * w
    );
    let segments = with_progress("segmenting", |progress| {
        segment_sequence(bases, &config, progress)
    })?;
    write_records(&segments, &segments_file(out_dir, m, w, l, gzip), gzip)?;

    let merged = with_progress("merging", |progress| {
        merge_segments(&segments, bases, &config, progress)
    })?;
    info!(
        "Number of segments before merge: {}, after merge: {}",
        segments.len(),
        merged.len()
    );
    write_records(&merged, &merged_segments_file(out_dir, m, w, l, gzip), gzip)?;

    let annotated = annotate_gc_content(bases, &merged)?;
    write_records(&annotated, &gc_segments_file(out_dir, m, w, l, gzip), gzip)?;

    Ok(())
}
