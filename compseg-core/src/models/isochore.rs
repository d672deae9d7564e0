use crate::models::Segment;

/// A window (or run of windows) with its GC content.
#[derive(PartialEq, Debug, Clone)]
pub struct Isochore {
    pub start: usize,
    /// exclusive
    pub end: usize,
    pub gc_content: f64,
}

/// A segment annotated with the GC percentage of its span.
#[derive(PartialEq, Debug, Clone)]
pub struct GcSegment {
    pub segment: Segment,
    pub gc_content: f64,
}
