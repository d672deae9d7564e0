pub const SEGMENT_HEADER: &str = "start,end,length,cost,bestWord";
pub const GC_SEGMENT_HEADER: &str = "start,end,length,cost,bestWord,gcContent";
pub const ISOCHORE_HEADER: &str = "start,end,gcContent";

pub const SEGMENTS_PREFIX: &str = "segments_output";
pub const MERGED_SEGMENTS_PREFIX: &str = "merged_segments_output";
pub const GC_SEGMENTS_PREFIX: &str = "segments_GcContent_output";
pub const ISOCHORES_PREFIX: &str = "isochores_output";
pub const PAIR_ISOCHORES_PREFIX: &str = "isochores";
pub const CSV_EXTENSION: &str = "csv";
pub const GZ_EXTENSION: &str = "gz";
