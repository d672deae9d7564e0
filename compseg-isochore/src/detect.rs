use compseg_core::SequenceError;
use compseg_core::models::{GcSegment, Isochore, Segment, SequenceView};
use compseg_core::progress::ProgressSink;
use log::info;

use crate::gc::gc_content;

const PROGRESS_EVERY: usize = 1000;

#[inline]
fn is_gc_pair(first: u8, second: u8) -> bool {
    matches!(
        (first.to_ascii_uppercase(), second.to_ascii_uppercase()),
        (b'G', b'C') | (b'C', b'G')
    )
}

///
/// Detect isochores as runs of windows rich in GC/CG dinucleotides.
///
/// A window of `window` bases slides one base at a time. Its density is the
/// number of GC or CG pairs divided by the `window - 1` pairs it holds. A
/// window whose density reaches `threshold` opens a new isochore, or
/// extends the last one when the two overlap. An isochore keeps the density
/// of the window that opened it, as a fraction in `[0, 1]` rather than a
/// percentage.
///
/// Windows shorter than two bases or longer than the sequence yield no
/// isochores.
///
pub fn detect_isochores(
    bases: &[u8],
    window: usize,
    threshold: f64,
    progress: &dyn ProgressSink,
) -> Vec<Isochore> {
    let len = bases.len();
    let mut isochores: Vec<Isochore> = Vec::new();
    if window < 2 || window > len {
        return isochores;
    }

    let pairs = (window - 1) as f64;
    let mut gc_pairs = bases[..window]
        .windows(2)
        .filter(|pair| is_gc_pair(pair[0], pair[1]))
        .count();

    for start in 0..=len - window {
        if start % PROGRESS_EVERY == 0 {
            progress.update(start, len);
        }

        let density = gc_pairs as f64 / pairs;
        if density >= threshold {
            let end = start + window;
            match isochores.last_mut() {
                Some(last) if last.end > start => last.end = end,
                _ => {
                    isochores.push(Isochore {
                        start,
                        end,
                        gc_content: density,
                    });
                }
            }
        }

        if start + window < len {
            if is_gc_pair(bases[start], bases[start + 1]) {
                gc_pairs -= 1;
            }
            if is_gc_pair(bases[start + window - 1], bases[start + window]) {
                gc_pairs += 1;
            }
        }
    }
    progress.update(len, len);

    info!(
        "Detected {} isochores (window={}, threshold={})",
        isochores.len(),
        window,
        threshold
    );
    isochores
}

///
/// Attach the GC percentage of its span to every segment. Segment
/// coordinates are those of the parent sequence of the view.
///
pub fn annotate_gc_content<'a>(
    sequence: impl Into<SequenceView<'a>>,
    segments: &[Segment],
) -> Result<Vec<GcSegment>, SequenceError> {
    let view: SequenceView<'a> = sequence.into();
    segments
        .iter()
        .map(|segment| -> Result<GcSegment, SequenceError> {
            let span = view.window(segment.start, segment.end)?;
            Ok(GcSegment {
                segment: segment.clone(),
                gc_content: gc_content(span.as_bytes()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use compseg_core::models::Sequence;
    use compseg_core::progress::{NoProgress, ProgressCounter};
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn spans(isochores: &[Isochore]) -> Vec<(usize, usize, f64)> {
        isochores
            .iter()
            .map(|i| (i.start, i.end, i.gc_content))
            .collect()
    }

    #[rstest]
    fn test_detect_two_islands() {
        let bases = b"GCGCGCAAAAAAAAGCGCGC";
        let isochores = detect_isochores(bases, 4, 0.5, &NoProgress);
        assert_eq!(
            spans(&isochores),
            vec![(0, 7, 1.0), (13, 20, 2.0 / 3.0)]
        );
    }

    #[rstest]
    fn test_zero_threshold_covers_sequence() {
        let bases = b"ATATATATAT";
        let isochores = detect_isochores(bases, 3, 0.0, &NoProgress);
        assert_eq!(spans(&isochores), vec![(0, 10, 0.0)]);
    }

    #[rstest]
    fn test_no_rich_windows() {
        assert!(detect_isochores(b"ATATATATAT", 3, 0.1, &NoProgress).is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(11)]
    fn test_degenerate_window(#[case] window: usize) {
        assert!(detect_isochores(b"GCGCGCGCGC", window, 0.5, &NoProgress).is_empty());
    }

    #[rstest]
    fn test_detect_reports_progress() {
        let counter = ProgressCounter::new();
        detect_isochores(b"GCGCGCGCGC", 4, 0.5, &counter);
        assert_eq!(counter.get(), (10, 10));
    }

    #[rstest]
    fn test_annotate_gc_content() {
        let bases = b"GGCCATAT";
        let segments = vec![Segment::new(0, 4, 2.0, "GC"), Segment::new(4, 8, 2.0, "AT")];
        let annotated = annotate_gc_content(bases, &segments).unwrap();

        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].gc_content, 100.0);
        assert_eq!(annotated[1].gc_content, 0.0);
        assert_eq!(annotated[1].segment, segments[1]);
    }

    #[rstest]
    fn test_annotate_within_view() {
        let sequence = Sequence::new("chr1", b"AAGGCCATATAA".to_vec());
        let view = sequence.view(2, 10).unwrap();
        let segments = vec![Segment::new(2, 6, 2.0, "GC"), Segment::new(4, 8, 1.0, "CA")];
        let annotated = annotate_gc_content(view, &segments).unwrap();

        assert_eq!(annotated[0].gc_content, 100.0);
        assert_eq!(annotated[1].gc_content, 50.0);
        assert!(annotate_gc_content(view, &[Segment::new(8, 12, 0.0, "AA")]).is_err());
    }

    #[rstest]
    fn test_annotate_out_of_range() {
        let segments = vec![Segment::new(0, 12, 2.0, "GC")];
        let result = annotate_gc_content(b"GGCC", &segments);
        assert!(matches!(
            result,
            Err(SequenceError::RangeOutOfBounds { end: 12, .. })
        ));
    }
}
