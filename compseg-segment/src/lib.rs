//! # compseg-segment
//!
//! Compositional segmentation of nucleotide sequences.
//!
//! A window of the sequence is summarised by an [OccurrenceMatrix]: how many
//! times each nucleotide appears at each position of a `w`-letter word. The
//! [segment_sequence] pass walks the sequence greedily, growing a candidate
//! segment one word at a time over a bounded lookahead and cutting where the
//! segment and the window after it are jointly most homogeneous. The
//! [merge_segments] pass then fuses adjacent segments that share a
//! representative word.
//!
//! ```no_run
//! use compseg_core::progress::NoProgress;
//! use compseg_segment::{SegmentationConfig, merge_segments, segment_sequence};
//!
//! let bases = b"ACGTACGTACGTACGTACGTGGCCGGCCGGCCGGCCGGCC";
//! let config = SegmentationConfig::new(2, 4, 3);
//! let segments = segment_sequence(bases, &config, &NoProgress).unwrap();
//! let merged = merge_segments(&segments, bases, &config, &NoProgress).unwrap();
//! ```
pub mod config;
pub mod consts;
pub mod errors;
pub mod matrix;
pub mod merge;
pub mod segmenter;

// re-exports
pub use config::*;
pub use errors::*;
pub use matrix::*;
pub use merge::*;
pub use segmenter::*;
