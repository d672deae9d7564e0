///
/// Segment struct, one homogeneous stretch of a sequence as reported by the
/// segmenter or the merger.
///
#[derive(PartialEq, Debug, Clone)]
pub struct Segment {
    pub start: usize,
    /// exclusive
    pub end: usize,
    /// homogeneity score of the span, in `[0, word_size]`
    pub score: f64,
    /// representative word of the span
    pub word: String,
}

impl Segment {
    pub fn new<S: Into<String>>(start: usize, end: usize, score: f64, word: S) -> Self {
        Segment {
            start,
            end,
            score,
            word: word.into(),
        }
    }

    ///
    /// Get length of the segment
    ///
    pub fn width(&self) -> usize {
        self.end - self.start
    }

    ///
    /// True when `next` begins exactly where this segment ends.
    ///
    pub fn touches(&self, next: &Segment) -> bool {
        self.end == next.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_width() {
        assert_eq!(Segment::new(10, 25, 1.5, "ACG").width(), 15);
    }

    #[rstest]
    fn test_touches() {
        let a = Segment::new(0, 4, 2.0, "GC");
        let b = Segment::new(4, 8, 2.0, "GC");
        let c = Segment::new(9, 12, 2.0, "GC");
        assert!(a.touches(&b));
        assert!(!b.touches(&c));
    }
}
