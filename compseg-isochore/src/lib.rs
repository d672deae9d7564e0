//! # compseg-isochore
//!
//! GC content statistics over nucleotide sequences: fixed windows of GC
//! percentage, isochore detection from GC/CG dinucleotide density, and GC
//! annotation of segments.
pub mod detect;
pub mod gc;

pub use detect::*;
pub use gc::*;
