use compseg_core::SequenceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Invalid parameter {name}: must be at least 1, got {value}")]
    InvalidParameter { name: &'static str, value: usize },

    #[error("Sequence of {length} bases is shorter than one minimal segment ({required} bases)")]
    SequenceTooShort { length: usize, required: usize },

    #[error("Matrix dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

pub type SegmentResult<T> = std::result::Result<T, SegmentError>;
