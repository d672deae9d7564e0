use compseg_core::models::{Segment, SequenceView};
use compseg_core::progress::ProgressSink;
use log::{debug, info, warn};

use crate::config::SegmentationConfig;
use crate::errors::{SegmentError, SegmentResult};
use crate::matrix::{Homogeneity, OccurrenceMatrix};

/// Best lookahead step seen so far for the current cut.
struct Candidate {
    total: f64,
    end: usize,
    left: Homogeneity,
    right: OccurrenceMatrix,
}

/// Combined score of a cut and the homogeneity of its left side.
fn score_cut(left: &OccurrenceMatrix, right: &OccurrenceMatrix) -> (f64, Homogeneity) {
    let left = left.score();
    let total = left.score + right.score().score;
    (total, left)
}

///
/// Split a sequence into contiguous compositionally homogeneous segments.
///
/// Starting at the beginning of the view, a left window of `m * w` bases and the right
/// window of the same size that follows it are scored. The left window is
/// then grown one word at a time (the right window slides along with it)
/// for up to `l` steps in total, stopping early when the right window would
/// run off the sequence. The step with the highest combined score wins,
/// the earliest one on ties. The winning left window becomes a segment and
/// its right window is reused as the next left window.
///
/// Segmentation stops when fewer than `2 * m * w` bases remain after the
/// current start, so a short tail is never reported.
///
/// # Arguments
///
/// - sequence: the letters to segment (upper case), or a view onto them
/// - config: segmentation parameters
/// - progress: receives `(position, len)` updates, relative to the view
///
/// # Returns
///
/// The segments in sequence order, in the coordinates of the parent
/// sequence the view was taken from.
pub fn segment_sequence<'a>(
    sequence: impl Into<SequenceView<'a>>,
    config: &SegmentationConfig,
    progress: &dyn ProgressSink,
) -> SegmentResult<Vec<Segment>> {
    config.validate()?;

    let view: SequenceView<'a> = sequence.into();
    let bases = view.as_bytes();
    let offset = view.offset();

    let word_size = config.word_size;
    let step = config.frame_step;
    let window = config.min_segment_len();
    let chunk = step.chunk_len(word_size);
    let len = bases.len();

    if len < window {
        return Err(SegmentError::SequenceTooShort {
            length: len,
            required: window,
        });
    }

    debug!(
        "Segmenting {} bases: m={}, w={}, l={}, frame step {}",
        len, config.min_segment_size, word_size, config.lookahead_size, step
    );

    let mut segments = Vec::new();
    let mut current_start = 0;
    let mut carried: Option<OccurrenceMatrix> = None;

    while current_start < len {
        let mut current_end = current_start + window;
        if current_end + window > len {
            break;
        }

        let mut left = match carried.take() {
            Some(matrix) => matrix,
            None => OccurrenceMatrix::build(&bases[current_start..current_end], word_size, step)?,
        };
        let mut right =
            OccurrenceMatrix::build(&bases[current_end..current_end + window], word_size, step)?;

        let (total, homogeneity) = score_cut(&left, &right);
        let mut best = Candidate {
            total,
            end: current_end,
            left: homogeneity,
            right: right.clone(),
        };

        for _ in 1..config.lookahead_size {
            let next_end = current_end + word_size;
            if next_end + window > len {
                break;
            }

            left.add_sequence(&bases[next_end - chunk..next_end], step);
            // add the entering frames before removing the leaving ones
            right.add_sequence(&bases[next_end + window - chunk..next_end + window], step);
            right.remove_sequence(&bases[current_end..current_end + chunk], step);
            current_end = next_end;

            let (total, homogeneity) = score_cut(&left, &right);
            if total > best.total {
                best = Candidate {
                    total,
                    end: current_end,
                    left: homogeneity,
                    right: right.clone(),
                };
            }
        }

        segments.push(Segment::new(
            offset + current_start,
            offset + best.end,
            best.left.score,
            best.left.word,
        ));

        current_start = best.end;
        carried = Some(best.right);
        progress.update(current_start, len);
    }

    if current_start < len {
        warn!(
            "{} trailing bases after position {} are too short for a cut and were not segmented",
            len - current_start,
            offset + current_start
        );
    }
    progress.update(len, len);

    info!("Found {} segments in {} bases", segments.len(), len);
    Ok(segments)
}
