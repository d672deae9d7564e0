use compseg_core::models::{Segment, SequenceView};
use compseg_core::progress::ProgressSink;
use log::info;

use crate::config::SegmentationConfig;
use crate::errors::SegmentResult;
use crate::matrix::OccurrenceMatrix;

///
/// Fuse runs of adjacent segments that share a representative word.
///
/// The list is scanned from the last segment backwards. A segment absorbs
/// its predecessor while both carry the same word and the predecessor ends
/// exactly where it starts. The merged span is rescored from a fresh
/// occurrence matrix over `[start, end)`, so its score and word may differ
/// from those of its parts.
///
/// # Arguments
///
/// - segments: segments in sequence order, non-overlapping
/// - sequence: the sequence (or view) the segments were computed on;
///   segment coordinates are those of its parent sequence
/// - config: supplies the word size and frame step used for rescoring
/// - progress: receives `(segments processed, segments.len())`
///
pub fn merge_segments<'a>(
    segments: &[Segment],
    sequence: impl Into<SequenceView<'a>>,
    config: &SegmentationConfig,
    progress: &dyn ProgressSink,
) -> SegmentResult<Vec<Segment>> {
    let view: SequenceView<'a> = sequence.into();
    let mut merged = Vec::new();
    let total = segments.len();
    let mut i = total;

    while i > 0 {
        let last = &segments[i - 1];
        let end = last.end;
        let mut start = last.start;
        i -= 1;

        while i > 0 {
            let prev = &segments[i - 1];
            if prev.word != last.word || !prev.touches(&segments[i]) {
                break;
            }
            start = prev.start;
            i -= 1;
        }

        let span = view.window(start, end)?;
        let homogeneity =
            OccurrenceMatrix::build(span.as_bytes(), config.word_size, config.frame_step)?
                .score();
        merged.push(Segment::new(start, end, homogeneity.score, homogeneity.word));
        progress.update(total - i, total);
    }

    merged.reverse();
    info!("Merged {} segments into {}", total, merged.len());
    Ok(merged)
}
