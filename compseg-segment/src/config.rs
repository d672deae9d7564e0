use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DEFAULT_FRAME_STEP, DEFAULT_LOOKAHEAD_SIZE, DEFAULT_MIN_SEGMENT_SIZE, DEFAULT_WORD_SIZE,
};
use crate::errors::{SegmentError, SegmentResult};
use crate::matrix::FrameStep;

#[derive(Error, Debug)]
pub enum SegmentationConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] SegmentError),
}

///
/// Parameters of a segmentation run.
///
/// - `min_segment_size` (m): minimal segment length, in words
/// - `word_size` (w): letters per word
/// - `lookahead_size` (l): how many one-word extensions are evaluated per cut
/// - `frame_step`: how frames advance when counting a window
///
/// Missing keys in a TOML file fall back to the defaults.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(default)]
pub struct SegmentationConfig {
    pub min_segment_size: usize,
    pub word_size: usize,
    pub lookahead_size: usize,
    pub frame_step: FrameStep,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_segment_size: DEFAULT_MIN_SEGMENT_SIZE,
            word_size: DEFAULT_WORD_SIZE,
            lookahead_size: DEFAULT_LOOKAHEAD_SIZE,
            frame_step: DEFAULT_FRAME_STEP,
        }
    }
}

impl SegmentationConfig {
    pub fn new(min_segment_size: usize, word_size: usize, lookahead_size: usize) -> Self {
        Self {
            min_segment_size,
            word_size,
            lookahead_size,
            frame_step: DEFAULT_FRAME_STEP,
        }
    }

    pub fn with_frame_step(mut self, frame_step: FrameStep) -> Self {
        self.frame_step = frame_step;
        self
    }

    /// Every parameter must be at least 1.
    pub fn validate(&self) -> SegmentResult<()> {
        for (name, value) in [
            ("min_segment_size", self.min_segment_size),
            ("word_size", self.word_size),
            ("lookahead_size", self.lookahead_size),
        ] {
            if value == 0 {
                return Err(SegmentError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Minimal segment length in bases (`m * w`).
    pub fn min_segment_len(&self) -> usize {
        self.min_segment_size.saturating_mul(self.word_size)
    }
}

impl TryFrom<&Path> for SegmentationConfig {
    type Error = SegmentationConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: SegmentationConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/segmentation.toml");
        let config = SegmentationConfig::try_from(path.as_path()).unwrap();

        assert_eq!(
            config,
            SegmentationConfig::new(50, 4, 8).with_frame_step(FrameStep::Base)
        );
    }

    #[rstest]
    fn test_missing_keys_use_defaults() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("partial.toml");
        fs::write(&path, "word_size = 3\n").unwrap();

        let config = SegmentationConfig::try_from(path.as_path()).unwrap();
        assert_eq!(config.word_size, 3);
        assert_eq!(config.min_segment_size, DEFAULT_MIN_SEGMENT_SIZE);
        assert_eq!(config.lookahead_size, DEFAULT_LOOKAHEAD_SIZE);
        assert_eq!(config.frame_step, FrameStep::Word);
    }

    #[rstest]
    fn test_zero_parameter_in_file_is_rejected() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("bad.toml");
        fs::write(&path, "lookahead_size = 0\n").unwrap();

        let result = SegmentationConfig::try_from(path.as_path());
        assert!(matches!(
            result,
            Err(SegmentationConfigError::Invalid(SegmentError::InvalidParameter {
                name: "lookahead_size",
                ..
            }))
        ));
    }

    #[rstest]
    #[case(SegmentationConfig::new(0, 5, 10), "min_segment_size")]
    #[case(SegmentationConfig::new(100, 0, 10), "word_size")]
    #[case(SegmentationConfig::new(100, 5, 0), "lookahead_size")]
    fn test_validate(#[case] config: SegmentationConfig, #[case] expected: &str) {
        match config.validate() {
            Err(SegmentError::InvalidParameter { name, value }) => {
                assert_eq!(name, expected);
                assert_eq!(value, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[rstest]
    fn test_min_segment_len() {
        assert_eq!(SegmentationConfig::default().min_segment_len(), 500);
    }
}
