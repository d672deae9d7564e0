use std::fmt::{self, Display};
use std::ops::Range;

use crate::errors::SequenceError;

///
/// An owned nucleotide sequence. Every analysis in compseg reads
/// slices of this buffer; nothing downstream copies it.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Sequence {
    pub name: String,
    bases: Vec<u8>,
}

///
/// A read-only window onto a [Sequence], remembering where it starts
/// in the parent buffer.
///
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct SequenceView<'a> {
    offset: usize,
    bases: &'a [u8],
}

impl Sequence {
    ///
    /// Create a new sequence. Letters are upper-cased and anything that is
    /// not alphabetic (line breaks, digits, white space) is dropped.
    ///
    pub fn new<S: Into<String>>(name: S, mut bases: Vec<u8>) -> Self {
        bases.retain(|b| b.is_ascii_alphabetic());
        bases.make_ascii_uppercase();
        Sequence {
            name: name.into(),
            bases,
        }
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    ///
    /// Borrow `[start, end)` of the sequence.
    ///
    pub fn view(&self, start: usize, end: usize) -> Result<SequenceView<'_>, SequenceError> {
        self.as_view().window(start, end)
    }

    /// View over the whole sequence.
    pub fn as_view(&self) -> SequenceView<'_> {
        SequenceView {
            offset: 0,
            bases: &self.bases,
        }
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.bases
    }
}

/// Borrow a whole buffer as a view starting at offset 0.
impl<'a, T: AsRef<[u8]> + ?Sized> From<&'a T> for SequenceView<'a> {
    fn from(bases: &'a T) -> Self {
        SequenceView {
            offset: 0,
            bases: bases.as_ref(),
        }
    }
}

impl<'a> SequenceView<'a> {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bases
    }

    /// Absolute coordinates of this view in the parent sequence.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.bases.len()
    }

    ///
    /// Narrow the view to `[start, end)`, expressed in absolute
    /// coordinates of the parent sequence.
    ///
    pub fn window(&self, start: usize, end: usize) -> Result<SequenceView<'a>, SequenceError> {
        let range = self.range();
        if start > end || start < range.start || end > range.end {
            return Err(SequenceError::RangeOutOfBounds {
                start,
                end,
                len: range.end,
            });
        }

        Ok(SequenceView {
            offset: start,
            bases: &self.bases[start - self.offset..end - self.offset],
        })
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bp)", self.name, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_new_normalizes_letters() {
        let seq = Sequence::new("chr1", b"acgt\nNNac 12g".to_vec());
        assert_eq!(seq.as_bytes(), b"ACGTNNACG");
        assert_eq!(seq.len(), 9);
    }

    #[rstest]
    fn test_view_keeps_absolute_offsets() {
        let seq = Sequence::new("chr1", b"AACCGGTT".to_vec());
        let view = seq.view(2, 6).unwrap();
        assert_eq!(view.as_bytes(), b"CCGG");
        assert_eq!(view.offset(), 2);

        let inner = view.window(3, 5).unwrap();
        assert_eq!(inner.as_bytes(), b"CG");
        assert_eq!(inner.range(), 3..5);
    }

    #[rstest]
    #[case(4, 9)]
    #[case(5, 3)]
    fn test_view_out_of_bounds(#[case] start: usize, #[case] end: usize) {
        let seq = Sequence::new("chr1", b"AACCGGTT".to_vec());
        assert!(matches!(
            seq.view(start, end),
            Err(SequenceError::RangeOutOfBounds { .. })
        ));
    }

    #[rstest]
    fn test_window_outside_parent_view() {
        let seq = Sequence::new("chr1", b"AACCGGTT".to_vec());
        let view = seq.view(2, 6).unwrap();
        assert!(view.window(1, 4).is_err());
        assert!(view.window(4, 7).is_err());
    }

    #[rstest]
    fn test_view_from_buffers() {
        let seq = Sequence::new("genome", b"ACGT".to_vec());
        assert_eq!(SequenceView::from(&seq), seq.as_view());
        assert_eq!(SequenceView::from(b"ACGT").as_bytes(), b"ACGT");
        assert_eq!(SequenceView::from(&b"ACGT"[1..]).offset(), 0);
        assert_eq!(seq.to_string(), "genome (4 bp)");
    }
}
