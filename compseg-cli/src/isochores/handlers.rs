use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use compseg_io::{isochores_file, pair_isochores_file};
use compseg_isochore::{detect_isochores, gc_windows};

use super::cli::{DEFAULT_STEP_SIZE, DEFAULT_WINDOW_SIZE};
use crate::input::{load_sequence, write_records};
use crate::progress::with_progress;

pub fn run_isochores(matches: &ArgMatches) -> Result<()> {
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

    let sequence = load_sequence(Path::new(input), matches)?;
    let bases = sequence.as_bytes();
    let out_dir = Path::new(output);

    if window > bases.len() {
        anyhow::bail!(
            "Window size {} is larger than the sequence ({} bp)",
            window,
            bases.len()
        );
    }

    let windows = with_progress("gc windows", |progress| {
        gc_windows(bases, window, step, progress)
    });
    write_records(&windows, &isochores_file(out_dir, window, step, gzip), gzip)?;

    if let Some(&threshold) = matches.get_one::<f64>("threshold") {
        let isochores = with_progress("isochores", |progress| {
            detect_isochores(bases, window, threshold, progress)
        });
        write_records(
            &isochores,
            &pair_isochores_file(out_dir, window, threshold, gzip),
            gzip,
        )?;
    }

    Ok(())
}
