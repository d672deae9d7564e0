use clap::{Arg, Command};

use crate::input::{DEFAULT_OUTPUT_DIR, gzip_arg, input_args};

pub const ISOCHORES_CMD: &str = "isochores";
pub const DEFAULT_WINDOW_SIZE: usize = 10_000;
pub const DEFAULT_STEP_SIZE: usize = 10;

pub fn create_isochores_cli() -> Command {
    Command::new(ISOCHORES_CMD)
        .about("Compute GC content windows and, with --threshold, GC/CG rich isochores.")
        .arg(
            Arg::new("input")
                .help("Path to the input sequence")
                .required(true),
        )
        .args(input_args())
        .arg(
            Arg::new("window")
                .long("window")
                .value_parser(clap::value_parser!(usize))
                .help("Window size in bases")
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
            Arg::new("threshold")
                .long("threshold")
                .value_parser(clap::value_parser!(f64))
                .help("Minimal GC/CG pair density (0 to 1) of an isochore window"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Directory receiving the csv files")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(gzip_arg())
}
