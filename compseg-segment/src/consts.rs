use crate::matrix::FrameStep;

pub const DEFAULT_MIN_SEGMENT_SIZE: usize = 100;
pub const DEFAULT_WORD_SIZE: usize = 5;
pub const DEFAULT_LOOKAHEAD_SIZE: usize = 10;
pub const DEFAULT_FRAME_STEP: FrameStep = FrameStep::Word;
