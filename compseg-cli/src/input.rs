//! Arguments and loading shared by the subcommands.
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches};
use log::info;

use compseg_core::models::Sequence;
use compseg_core::utils::{
    load_full_genome, load_genbank, load_plain_sequence, read_chromosome, read_chromosome_file,
};
use compseg_io::{CsvRecord, CsvWrite};
use compseg_segment::{FrameStep, SegmentationConfig};

pub const DEFAULT_INPUT_TYPE: &str = "fullDna";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// How the input file is turned into one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// every FASTA record, concatenated
    FullDna,
    /// a single chromosome FASTA (or one named record with `--chromosome`)
    Chromosome,
    GenBank,
    /// raw letters without headers
    Plain,
}

impl FromStr for InputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fulldna" => Ok(InputType::FullDna),
            "chromosome" => Ok(InputType::Chromosome),
            "genbank" => Ok(InputType::GenBank),
            "plain" => Ok(InputType::Plain),
            _ => Err(format!(
                "Invalid input type: {}. Valid options are 'fullDna', 'chromosome', 'genbank' or 'plain'",
                s
            )),
        }
    }
}

pub fn input_args() -> [Arg; 2] {
    [
        Arg::new("input-type")
            .long("input-type")
            .short('t')
            .help("How to read the input: fullDna, chromosome, genbank or plain")
            .default_value(DEFAULT_INPUT_TYPE),
        Arg::new("chromosome")
            .long("chromosome")
            .short('c')
            .help("With --input-type chromosome, the record to pick out of a multi-record FASTA"),
    ]
}

pub fn segmentation_args() -> [Arg; 5] {
    [
        Arg::new("min-segment-size")
            .long("min-segment-size")
            .short('m')
            .value_parser(clap::value_parser!(usize))
            .help("Minimal segment length, in words"),
        Arg::new("word-size")
            .long("word-size")
            .short('w')
            .value_parser(clap::value_parser!(usize))
            .help("Letters per word"),
        Arg::new("lookahead-size")
            .long("lookahead-size")
            .short('l')
            .value_parser(clap::value_parser!(usize))
            .help("Number of one-word extensions evaluated per cut"),
        Arg::new("frame-step")
            .long("frame-step")
            .help("How frames advance when counting a window: word or base"),
        Arg::new("config")
            .long("config")
            .help("TOML file with segmentation parameters; flags override its values"),
    ]
}

pub fn gzip_arg() -> Arg {
    Arg::new("gzip")
        .long("gzip")
        .help("Write gzipped csv files")
        .action(ArgAction::SetTrue)
}

///
/// Load the sequence named by `path` the way `--input-type` asks for.
///
pub fn load_sequence(path: &Path, matches: &ArgMatches) -> Result<Sequence> {
    let input_type = matches
        .get_one::<String>("input-type")
        .map(String::as_str)
        .unwrap_or(DEFAULT_INPUT_TYPE);
    let input_type = InputType::from_str(input_type).map_err(anyhow::Error::msg)?;

    let sequence = match input_type {
        InputType::FullDna => load_full_genome(path),
        InputType::Chromosome => match matches.get_one::<String>("chromosome") {
            Some(name) => read_chromosome(path, name),
            None => read_chromosome_file(path),
        },
        InputType::GenBank => load_genbank(path),
        InputType::Plain => load_plain_sequence(path),
    }
    .with_context(|| format!("Failed to load sequence from {}", path.display()))?;

    info!("Loaded {}", sequence);
    Ok(sequence)
}

///
/// Segmentation parameters: the `--config` file (or defaults), overridden
/// by whichever flags the subcommand defines and the user supplied.
///
pub fn resolve_config(matches: &ArgMatches) -> Result<SegmentationConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => SegmentationConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to read config file {}", path))?,
        None => SegmentationConfig::default(),
    };

    let flag = |id: &str| matches.try_get_one::<usize>(id).ok().flatten().copied();
    if let Some(m) = flag("min-segment-size") {
        config.min_segment_size = m;
    }
    if let Some(w) = flag("word-size") {
        config.word_size = w;
    }
    if let Some(l) = flag("lookahead-size") {
        config.lookahead_size = l;
    }
    if let Some(step) = matches.get_one::<String>("frame-step") {
        config.frame_step = FrameStep::from_str(step).map_err(anyhow::Error::msg)?;
    }

    config.validate()?;
    Ok(config)
}

/// Write `records` as csv, gzipped when asked.
pub fn write_records<R: CsvRecord>(records: &[R], path: &Path, gzip: bool) -> Result<()> {
    let result = match gzip {
        true => records.write_csv_gz(path),
        false => records.write_csv(path),
    };
    result.with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} rows to {}", records.len(), path.display());
    Ok(())
}
