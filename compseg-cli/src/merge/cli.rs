use clap::{Arg, Command};

use crate::input::{input_args, segmentation_args};

pub const MERGE_CMD: &str = "merge";
pub const DEFAULT_OUT: &str = "merged_segments.csv";

pub fn create_merge_cli() -> Command {
    Command::new(MERGE_CMD)
        .about("Merge adjacent segments of a saved segmentation that share a representative word.")
        .arg(
            Arg::new("segments")
                .help("Segments csv written by `segment` (optionally gzipped)")
                .required(true),
        )
        .arg(
            Arg::new("sequence")
                .help("The sequence the segments were computed on")
                .required(true),
        )
        .args(input_args())
        .args(segmentation_args())
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output csv file; a .gz extension writes it gzipped")
                .default_value(DEFAULT_OUT),
        )
}
