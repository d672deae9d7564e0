use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SegmentError;

/// Matrix row labels.
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Order in which rows compete for the majority of a column: A, T, C, G.
const MAJORITY_PRIORITY: [usize; 4] = [0, 3, 1, 2];

/// Fills the empty columns of a representative word.
pub const DEFAULT_LETTER: u8 = b'A';

///
/// Map a nucleotide to its matrix row. Anything but `A`, `C`, `G` or `T`
/// (e.g. `N`) has no row and is not counted.
///
#[inline]
pub fn nucleotide_row(base: u8) -> Option<usize> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

///
/// How the `w`-wide frame advances over a region when counting.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStep {
    /// Non-overlapping words aligned to the region start.
    #[default]
    Word,
    /// Every overlapping `w`-mer, advancing one base at a time.
    Base,
}

impl FrameStep {
    ///
    /// Number of letters whose frames enter (or leave) a window that grows
    /// (or shrinks) by one word.
    ///
    pub fn chunk_len(&self, word_size: usize) -> usize {
        match self {
            FrameStep::Word => word_size,
            FrameStep::Base => 2 * word_size - 1,
        }
    }
}

impl FromStr for FrameStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "word" => Ok(FrameStep::Word),
            "base" => Ok(FrameStep::Base),
            _ => Err(format!("Invalid frame step: {}. Valid options are 'word' or 'base'", s)),
        }
    }
}

impl Display for FrameStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameStep::Word => write!(f, "word"),
            FrameStep::Base => write!(f, "base"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOp {
    Add,
    Subtract,
}

///
/// Homogeneity of a window: the summed majority fraction of every word
/// position and the word spelled by those majority letters.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Homogeneity {
    pub score: f64,
    pub word: String,
}

///
/// Occurrence matrix: counts of each nucleotide (rows, A C G T) at each
/// position inside a word (columns). Stored row-major.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceMatrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl OccurrenceMatrix {
    /// All-zero matrix for words of `word_size` letters.
    pub fn new(word_size: usize) -> Result<Self, SegmentError> {
        if word_size == 0 {
            return Err(SegmentError::InvalidParameter {
                name: "word_size",
                value: word_size,
            });
        }

        Ok(Self {
            data: vec![0; NUCLEOTIDES.len() * word_size],
            rows: NUCLEOTIDES.len(),
            cols: word_size,
        })
    }

    ///
    /// Count every frame of `bases`. Runs in O(bases.len() + word_size) for
    /// both frame steps. A region shorter than one word yields a zero matrix.
    ///
    pub fn build(bases: &[u8], word_size: usize, step: FrameStep) -> Result<Self, SegmentError> {
        let mut matrix = Self::new(word_size)?;
        matrix.tally(bases, step, 1);
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn word_size(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    ///
    /// Element-wise sum or difference of two matrices of the same shape.
    ///
    pub fn combine(&self, other: &OccurrenceMatrix, op: MatrixOp) -> Result<Self, SegmentError> {
        let mut result = self.clone();
        result.accumulate(other, op)?;
        Ok(result)
    }

    /// In-place form of [OccurrenceMatrix::combine].
    pub fn accumulate(&mut self, other: &OccurrenceMatrix, op: MatrixOp) -> Result<(), SegmentError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(SegmentError::DimensionMismatch {
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }

        match op {
            MatrixOp::Add => self
                .data
                .iter_mut()
                .zip(&other.data)
                .for_each(|(a, b)| *a += b),
            MatrixOp::Subtract => self
                .data
                .iter_mut()
                .zip(&other.data)
                .for_each(|(a, b)| *a -= b),
        }
        Ok(())
    }

    ///
    /// Add the frames of `chunk` to the matrix. Equivalent to combining with
    /// `OccurrenceMatrix::build(chunk, ..)` without allocating it; this
    /// in-place path is what the segmenter slides its windows with.
    ///
    pub fn add_sequence(&mut self, chunk: &[u8], step: FrameStep) {
        self.tally(chunk, step, 1);
    }

    /// Remove the frames of `chunk` from the matrix.
    pub fn remove_sequence(&mut self, chunk: &[u8], step: FrameStep) {
        self.tally(chunk, step, -1);
    }

    fn tally(&mut self, bases: &[u8], step: FrameStep, delta: i64) {
        let cols = self.cols;
        if bases.len() < cols {
            return;
        }

        match step {
            FrameStep::Word => {
                for frame in bases.chunks_exact(cols) {
                    for (col, &base) in frame.iter().enumerate() {
                        if let Some(row) = nucleotide_row(base) {
                            self.data[row * cols + col] += delta;
                        }
                    }
                }
            }
            FrameStep::Base => {
                // column `col` sees positions col..col + frames
                let frames = bases.len() - cols + 1;
                let mut counts = [0i64; 4];
                for &base in &bases[..frames] {
                    if let Some(row) = nucleotide_row(base) {
                        counts[row] += 1;
                    }
                }

                for col in 0..cols {
                    if col > 0 {
                        if let Some(row) = nucleotide_row(bases[col - 1]) {
                            counts[row] -= 1;
                        }
                        if let Some(row) = nucleotide_row(bases[col - 1 + frames]) {
                            counts[row] += 1;
                        }
                    }
                    for (row, count) in counts.iter().enumerate() {
                        self.data[row * cols + col] += delta * count;
                    }
                }
            }
        }
    }

    ///
    /// Homogeneity score and representative word of the matrix.
    ///
    /// For each column the majority letter is found with a strict `>` scan
    /// in A, T, C, G order, so ties keep the earlier letter and an empty
    /// column keeps [DEFAULT_LETTER]. The column adds `max / total` to the
    /// score (nothing when the column is empty).
    ///
    pub fn score(&self) -> Homogeneity {
        let mut score = 0.0;
        let mut word = String::with_capacity(self.cols);

        for col in 0..self.cols {
            let mut max_count = 0;
            let mut column_total = 0;
            let mut best_letter = DEFAULT_LETTER;

            for &row in &MAJORITY_PRIORITY {
                let count = self.data[row * self.cols + col];
                column_total += count;
                if count > max_count {
                    max_count = count;
                    best_letter = NUCLEOTIDES[row];
                }
            }

            if column_total > 0 {
                score += max_count as f64 / column_total as f64;
            }
            word.push(best_letter as char);
        }

        Homogeneity { score, word }
    }
}

impl Display for OccurrenceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, letter) in NUCLEOTIDES.iter().enumerate() {
            write!(f, "{}", *letter as char)?;
            for col in 0..self.cols {
                write!(f, " {}", self.data[row * self.cols + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::*;

    fn counts(matrix: &OccurrenceMatrix) -> Vec<Vec<i64>> {
        (0..matrix.rows())
            .map(|row| {
                (0..matrix.word_size())
                    .map(|col| matrix.get(row, col).unwrap())
                    .collect()
            })
            .collect()
    }

    #[rstest]
    fn test_build_word_frames() {
        let matrix = OccurrenceMatrix::build(b"ACGTAG", 2, FrameStep::Word).unwrap();
        // frames AC, GT, AG
        assert_eq!(
            counts(&matrix),
            vec![vec![2, 0], vec![0, 1], vec![1, 1], vec![0, 1]]
        );
    }

    #[rstest]
    fn test_build_ignores_partial_word() {
        let full = OccurrenceMatrix::build(b"ACGT", 2, FrameStep::Word).unwrap();
        let partial = OccurrenceMatrix::build(b"ACGTA", 2, FrameStep::Word).unwrap();
        assert_eq!(full, partial);
    }

    #[rstest]
    fn test_build_base_frames() {
        let matrix = OccurrenceMatrix::build(b"ACGT", 2, FrameStep::Base).unwrap();
        // frames AC, CG, GT
        assert_eq!(
            counts(&matrix),
            vec![vec![1, 0], vec![1, 1], vec![1, 1], vec![0, 1]]
        );
    }

    #[rstest]
    #[case(FrameStep::Word)]
    #[case(FrameStep::Base)]
    fn test_build_shorter_than_word(#[case] step: FrameStep) {
        let matrix = OccurrenceMatrix::build(b"AC", 3, step).unwrap();
        assert_eq!(counts(&matrix), vec![vec![0; 3]; 4]);
    }

    #[rstest]
    fn test_build_zero_word_size() {
        let result = OccurrenceMatrix::build(b"ACGT", 0, FrameStep::Word);
        assert!(matches!(result, Err(SegmentError::InvalidParameter { .. })));
    }

    #[rstest]
    fn test_unknown_letters_reduce_column_total() {
        let matrix = OccurrenceMatrix::build(b"ANANANAN", 2, FrameStep::Word).unwrap();
        assert_eq!(counts(&matrix), vec![vec![4, 0], vec![0, 0], vec![0, 0], vec![0, 0]]);

        let homogeneity = matrix.score();
        assert_eq!(homogeneity.score, 1.0);
        assert_eq!(homogeneity.word, "AA");
    }

    #[rstest]
    fn test_combine_dimension_mismatch() {
        let a = OccurrenceMatrix::new(2).unwrap();
        let b = OccurrenceMatrix::new(3).unwrap();
        assert!(matches!(
            a.combine(&b, MatrixOp::Add),
            Err(SegmentError::DimensionMismatch {
                left: (4, 2),
                right: (4, 3)
            })
        ));
    }

    #[rstest]
    fn test_add_sequence_matches_combine() {
        let mut incremental = OccurrenceMatrix::build(b"ACGTAC", 3, FrameStep::Base).unwrap();
        incremental.add_sequence(b"GGTTA", FrameStep::Base);

        let chunk = OccurrenceMatrix::build(b"GGTTA", 3, FrameStep::Base).unwrap();
        let combined = OccurrenceMatrix::build(b"ACGTAC", 3, FrameStep::Base)
            .unwrap()
            .combine(&chunk, MatrixOp::Add)
            .unwrap();
        assert_eq!(incremental, combined);

        incremental.remove_sequence(b"GGTTA", FrameStep::Base);
        assert_eq!(
            incremental,
            OccurrenceMatrix::build(b"ACGTAC", 3, FrameStep::Base).unwrap()
        );
    }

    #[rstest]
    fn test_score_zero_matrix() {
        let homogeneity = OccurrenceMatrix::new(4).unwrap().score();
        assert_eq!(homogeneity.score, 0.0);
        assert_eq!(homogeneity.word, "AAAA");
    }

    #[rstest]
    #[case(b"AAAAAAAAAA", 2, 2.0, "AA")]
    #[case(b"GCGCGCGC", 2, 2.0, "GC")]
    #[case(b"GCGCGCAA", 2, 1.5, "GC")]
    #[case(b"ACAT", 2, 1.5, "AT")]
    #[case(b"TACA", 2, 1.5, "TA")]
    fn test_score(
        #[case] bases: &[u8],
        #[case] word_size: usize,
        #[case] score: f64,
        #[case] word: &str,
    ) {
        let homogeneity = OccurrenceMatrix::build(bases, word_size, FrameStep::Word)
            .unwrap()
            .score();
        assert_eq!(homogeneity.score, score);
        assert_eq!(homogeneity.word, word);
    }

    #[rstest]
    fn test_majority_tie_priority() {
        // one of each letter in the single column: A wins, then T, then C
        let all = OccurrenceMatrix::build(b"ACGT", 1, FrameStep::Word).unwrap();
        assert_eq!(all.score().word, "A");

        let no_a = OccurrenceMatrix::build(b"CGT", 1, FrameStep::Word).unwrap();
        assert_eq!(no_a.score().word, "T");

        let c_and_g = OccurrenceMatrix::build(b"GC", 1, FrameStep::Word).unwrap();
        assert_eq!(c_and_g.score().word, "C");
    }

    #[rstest]
    fn test_display() {
        let matrix = OccurrenceMatrix::build(b"ACGT", 2, FrameStep::Word).unwrap();
        assert_eq!(matrix.to_string(), "A 1 0\nC 0 1\nG 1 0\nT 0 1\n");
    }

    #[rstest]
    #[case("word", FrameStep::Word)]
    #[case("Base", FrameStep::Base)]
    fn test_frame_step_from_str(#[case] input: &str, #[case] expected: FrameStep) {
        assert_eq!(FrameStep::from_str(input).unwrap(), expected);
        assert!(FrameStep::from_str("codon").is_err());
    }

    fn nucleotides(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(
            prop::sample::select(vec![b'A', b'C', b'G', b'T', b'N']),
            0..max_len,
        )
    }

    fn frame_step() -> impl Strategy<Value = FrameStep> {
        prop_oneof![Just(FrameStep::Word), Just(FrameStep::Base)]
    }

    proptest! {
        #[test]
        fn prop_add_then_subtract_is_identity(
            a in nucleotides(64),
            b in nucleotides(64),
            word_size in 1usize..6,
            step in frame_step(),
        ) {
            let ma = OccurrenceMatrix::build(&a, word_size, step).unwrap();
            let mb = OccurrenceMatrix::build(&b, word_size, step).unwrap();
            let round_trip = ma
                .combine(&mb, MatrixOp::Add)
                .unwrap()
                .combine(&mb, MatrixOp::Subtract)
                .unwrap();
            prop_assert_eq!(round_trip, ma);
        }

        #[test]
        fn prop_score_is_bounded(
            bases in nucleotides(128),
            word_size in 1usize..8,
            step in frame_step(),
        ) {
            let homogeneity = OccurrenceMatrix::build(&bases, word_size, step).unwrap().score();
            prop_assert!(homogeneity.score >= 0.0);
            prop_assert!(homogeneity.score <= word_size as f64 + 1e-9);
            prop_assert_eq!(homogeneity.word.len(), word_size);
        }

        #[test]
        fn prop_repeated_word_is_fully_homogeneous(
            word in prop::collection::vec(prop::sample::select(vec![b'A', b'C', b'G', b'T']), 1..6),
            repeats in 1usize..20,
        ) {
            let bases = word.repeat(repeats);
            let homogeneity = OccurrenceMatrix::build(&bases, word.len(), FrameStep::Word)
                .unwrap()
                .score();
            prop_assert_eq!(homogeneity.score, word.len() as f64);
            prop_assert_eq!(homogeneity.word.as_bytes(), &word[..]);
        }

        #[test]
        fn prop_base_build_matches_naive_count(
            bases in nucleotides(64),
            word_size in 1usize..6,
        ) {
            let matrix = OccurrenceMatrix::build(&bases, word_size, FrameStep::Base).unwrap();
            let mut naive = OccurrenceMatrix::new(word_size).unwrap();
            if bases.len() >= word_size {
                for start in 0..=bases.len() - word_size {
                    naive.add_sequence(&bases[start..start + word_size], FrameStep::Word);
                }
            }
            prop_assert_eq!(matrix, naive);
        }
    }
}
