mod extract;
mod input;
mod isochores;
mod merge;
mod progress;
mod segment;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "compseg";
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Compositional segmentation of DNA sequences into homogeneous segments, with GC content and isochore tools.")
        .subcommand_required(true)
        .subcommand(segment::cli::create_segment_cli())
        .subcommand(merge::cli::create_merge_cli())
        .subcommand(isochores::cli::create_isochores_cli())
        .subcommand(extract::cli::create_extract_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(consts::DEFAULT_LOG_LEVEL),
    )
    .init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // FULL SEGMENTATION PIPELINE
        //
        Some((segment::cli::SEGMENT_CMD, matches)) => {
            segment::handlers::run_segment(matches)?;
        }

        //
        // MERGE A SAVED SEGMENTATION
        //
        Some((merge::cli::MERGE_CMD, matches)) => {
            merge::handlers::run_merge(matches)?;
        }

        //
        // GC WINDOWS AND ISOCHORES
        //
        Some((isochores::cli::ISOCHORES_CMD, matches)) => {
            isochores::handlers::run_isochores(matches)?;
        }

        //
        // SPLIT A GENOME INTO CHROMOSOME FILES
        //
        Some((extract::cli::EXTRACT_CMD, matches)) => {
            extract::handlers::run_extract(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
