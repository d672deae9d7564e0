pub mod isochore;
pub mod segment;
pub mod sequence;

// re-export for cleaner imports
pub use self::isochore::{GcSegment, Isochore};
pub use self::segment::Segment;
pub use self::sequence::{Sequence, SequenceView};
