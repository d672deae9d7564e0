use clap::{Arg, ArgAction, Command};

use crate::input::{DEFAULT_OUTPUT_DIR, gzip_arg, input_args, segmentation_args};

pub const SEGMENT_CMD: &str = "segment";
pub const DEFAULT_WINDOW_SIZE: usize = 10_000;
pub const DEFAULT_STEP_SIZE: usize = 10;

/// Creates the segment CLI Command object
pub fn create_segment_cli() -> Command {
    Command::new(SEGMENT_CMD)
        .about("Segment a sequence, merge similar neighbours and annotate GC content.")
        .arg(
            Arg::new("input")
                .help("Path to the input sequence (FASTA, optionally gzipped)")
                .required(true),
        )
        .args(input_args())
        .args(segmentation_args())
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Directory receiving the csv files")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .value_parser(clap::value_parser!(usize))
                .help("GC window size for the isochore pass")
                .default_value(DEFAULT_WINDOW_SIZE.to_string()),
        )
        .arg(
            Arg::new("step")
                .long("step")
                .value_parser(clap::value_parser!(usize))
                .help("Distance between GC windows")
                .default_value(DEFAULT_STEP_SIZE.to_string()),
        )
        .arg(
            Arg::new("no-isochores")
                .long("no-isochores")
                .help("Skip the GC window pass")
                .action(ArgAction::SetTrue),
        )
        .arg(gzip_arg())
}
