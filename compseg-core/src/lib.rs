//! # compseg-core
//!
//! Shared building blocks for compseg: the owned [models::Sequence] buffer and
//! its read-only views, the [models::Segment] record produced by segmentation,
//! sequence loaders (FASTA, GenBank, plain text) and the progress reporting
//! interface used by every long running pass.
//!
pub mod errors;
pub mod models;
pub mod progress;
pub mod utils;

pub use errors::SequenceError;
