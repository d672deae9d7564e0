use clap::{Arg, Command};

use crate::input::DEFAULT_OUTPUT_DIR;

pub const EXTRACT_CMD: &str = "extract";

pub fn create_extract_cli() -> Command {
    Command::new(EXTRACT_CMD)
        .about("Split a multi-record FASTA file into one <id>.fna file per chromosome.")
        .arg(Arg::new("fasta").help("Path to the genome FASTA").required(true))
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Directory receiving the chromosome files")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
}
