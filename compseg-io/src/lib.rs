//! # Input/Output utilities for compseg.
//!
//! Segments, GC-annotated segments and isochores are stored as comma
//! separated files with a single header line, optionally gzipped. The
//! [names] module builds the output file names used by the command line
//! pipeline.
//!
pub mod consts;
pub mod csv;
pub mod error;
pub mod names;

// re-expose core functions
pub use self::consts::*;
pub use self::csv::*;
pub use self::error::*;
pub use self::names::*;
