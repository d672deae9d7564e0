use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing FASTA record: {0}")]
    FastaParseError(String),

    #[error("No sequence records found in file: {0}")]
    EmptySequenceFile(String),

    #[error("Chromosome {0} not found")]
    ChromosomeNotFound(String),

    #[error("Range {start}..{end} is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
