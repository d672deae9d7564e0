use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::{Deserialize, Serialize};

use compseg_core::models::{GcSegment, Isochore, Segment};
use compseg_core::utils::get_dynamic_reader;

use crate::consts::{GC_SEGMENT_HEADER, ISOCHORE_HEADER, SEGMENT_HEADER};
use crate::error::{CsvError, Result};

/// One row of a segments file.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct SegmentRow {
    pub start: usize,
    pub end: usize,
    pub length: usize,
    pub cost: f64,
    #[serde(rename = "bestWord")]
    pub best_word: String,
}

/// One row of a GC annotated segments file.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct GcSegmentRow {
    pub start: usize,
    pub end: usize,
    pub length: usize,
    pub cost: f64,
    #[serde(rename = "bestWord")]
    pub best_word: String,
    #[serde(rename = "gcContent")]
    pub gc_content: f64,
}

/// One row of an isochores file.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct IsochoreRow {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "gcContent")]
    pub gc_content: f64,
}

impl From<&Segment> for SegmentRow {
    fn from(segment: &Segment) -> Self {
        SegmentRow {
            start: segment.start,
            end: segment.end,
            length: segment.width(),
            cost: segment.score,
            best_word: segment.word.clone(),
        }
    }
}

impl TryFrom<SegmentRow> for Segment {
    type Error = String;

    /// The length column is derived data and is only checked for consistency.
    fn try_from(row: SegmentRow) -> std::result::Result<Self, Self::Error> {
        if row.end < row.start || row.end - row.start != row.length {
            return Err(format!(
                "inconsistent coordinates: start={}, end={}, length={}",
                row.start, row.end, row.length
            ));
        }
        Ok(Segment::new(row.start, row.end, row.cost, row.best_word))
    }
}

impl From<&GcSegment> for GcSegmentRow {
    fn from(gc: &GcSegment) -> Self {
        let segment = &gc.segment;
        GcSegmentRow {
            start: segment.start,
            end: segment.end,
            length: segment.width(),
            cost: segment.score,
            best_word: segment.word.clone(),
            gc_content: gc.gc_content,
        }
    }
}

impl From<&Isochore> for IsochoreRow {
    fn from(isochore: &Isochore) -> Self {
        IsochoreRow {
            start: isochore.start,
            end: isochore.end,
            gc_content: isochore.gc_content,
        }
    }
}

///
/// A record that is stored as one csv row under a fixed header.
///
pub trait CsvRecord {
    const HEADER: &'static str;

    type Row: Serialize;

    fn to_row(&self) -> Self::Row;
}

impl CsvRecord for Segment {
    const HEADER: &'static str = SEGMENT_HEADER;
    type Row = SegmentRow;

    fn to_row(&self) -> SegmentRow {
        SegmentRow::from(self)
    }
}

impl CsvRecord for GcSegment {
    const HEADER: &'static str = GC_SEGMENT_HEADER;
    type Row = GcSegmentRow;

    fn to_row(&self) -> GcSegmentRow {
        GcSegmentRow::from(self)
    }
}

impl CsvRecord for Isochore {
    const HEADER: &'static str = ISOCHORE_HEADER;
    type Row = IsochoreRow;

    fn to_row(&self) -> IsochoreRow {
        IsochoreRow::from(self)
    }
}

pub trait CsvWrite {
    ///
    /// Write data to disk as a csv file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_csv<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write data to disk as a csv.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_csv_gz<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

// the header is written by hand so that empty files still carry one
fn write_rows<R: CsvRecord, W: Write>(records: &[R], out: W) -> Result<W> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(R::HEADER.split(','))?;
    for record in records {
        writer.serialize(record.to_row())?;
    }
    writer.into_inner().map_err(|e| CsvError::Io(e.into_error()))
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

impl<R: CsvRecord> CsvWrite for [R] {
    fn write_csv<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let file = BufWriter::new(create_file(path.as_ref())?);
        write_rows(self, file)?.flush()?;
        Ok(())
    }

    fn write_csv_gz<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let file = create_file(path.as_ref())?;
        let encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        write_rows(self, encoder)?.finish()?.flush()?;
        Ok(())
    }
}

fn parse_error(line: Option<u64>, message: String) -> CsvError {
    CsvError::Parse {
        line: line.map_or(0, |line| line as usize),
        message,
    }
}

///
/// Read a segments csv file (optionally gzipped) back into memory. The file
/// must start with the `start,end,length,cost,bestWord` header; blank lines
/// are ignored.
///
/// # Arguments
/// - path: the path to the file to read
pub fn read_segments_csv<T: AsRef<Path>>(path: T) -> Result<Vec<Segment>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(get_dynamic_reader(path.as_ref())?);

    let headers: StringRecord = reader.headers()?.clone();
    if !headers.iter().eq(SEGMENT_HEADER.split(',')) {
        return Err(CsvError::MissingHeader(SEGMENT_HEADER));
    }

    let mut segments = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| parse_error(e.position().map(|p| p.line()), e.to_string()))?;
        let line = record.position().map(|p| p.line());

        let row: SegmentRow = record
            .deserialize(Some(&headers))
            .map_err(|e| parse_error(line, e.to_string()))?;
        segments.push(Segment::try_from(row).map_err(|message| parse_error(line, message))?);
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {

    use super::*;

    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    fn write_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("segments.csv");
        fs::write(&path, content).unwrap();
        (tempdir, path)
    }

    #[fixture]
    fn segments() -> Vec<Segment> {
        vec![
            Segment::new(0, 4, 1.5, "GC"),
            Segment::new(4, 10, 2.0, "AT"),
        ]
    }

    #[rstest]
    fn test_write_csv(segments: Vec<Segment>) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested/out.csv");

        segments.write_csv(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "start,end,length,cost,bestWord\n0,4,4,1.5,GC\n4,10,6,2.0,AT\n"
        );
        assert_eq!(read_segments_csv(&path).unwrap(), segments);
    }

    #[rstest]
    fn test_write_empty_keeps_header() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("empty.csv");

        Vec::<Segment>::new().write_csv(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "start,end,length,cost,bestWord\n"
        );
        assert!(read_segments_csv(&path).unwrap().is_empty());
    }

    #[rstest]
    fn test_write_csv_gz_reads_back(segments: Vec<Segment>) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("out.csv.gz");

        segments.write_csv_gz(&path).unwrap();

        assert_eq!(read_segments_csv(&path).unwrap(), segments);
    }

    #[rstest]
    fn test_read_segments_fixture() {
        let segments = read_segments_csv(get_test_path("segments.csv")).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], Segment::new(8, 16, 2.0, "GC"));
    }

    #[rstest]
    fn test_read_quoted_fields() {
        let (_dir, path) =
            write_file("start,end,length,cost,bestWord\n\"0\",4,4,2,\"GC\"\n\n4,8,4,2,GC\n");

        assert_eq!(
            read_segments_csv(&path).unwrap(),
            vec![Segment::new(0, 4, 2.0, "GC"), Segment::new(4, 8, 2.0, "GC")]
        );
    }

    #[rstest]
    #[case("start,end,length,cost,bestWord\n0,4,4,1.5,GC\n4,x,2,1.0,AT\n")]
    #[case("start,end,length,cost,bestWord\n0,4,4,1.5,GC\n4,8,5,1.0,AT\n")]
    #[case("start,end,length,cost,bestWord\n0,4,4,1.5,GC\n4,8,4\n")]
    fn test_read_malformed_row(#[case] content: &str) {
        let (_dir, path) = write_file(content);

        let result = read_segments_csv(&path);
        assert!(matches!(result, Err(CsvError::Parse { line: 3, .. })));
    }

    #[rstest]
    #[case("")]
    #[case("0,4,4,2,GC\n4,8,4,2,GC\n")]
    #[case("start,end,cost,bestWord\n0,4,2,GC\n")]
    fn test_read_requires_header(#[case] content: &str) {
        let (_dir, path) = write_file(content);

        assert!(matches!(
            read_segments_csv(&path),
            Err(CsvError::MissingHeader(_))
        ));
    }

    #[rstest]
    fn test_write_gc_segments_and_isochores() {
        let tempdir = tempfile::tempdir().unwrap();

        let gc = vec![GcSegment {
            segment: Segment::new(0, 4, 2.0, "GC"),
            gc_content: 100.0,
        }];
        let gc_path = tempdir.path().join("gc.csv");
        gc.write_csv(&gc_path).unwrap();
        assert_eq!(
            fs::read_to_string(&gc_path).unwrap(),
            "start,end,length,cost,bestWord,gcContent\n0,4,4,2.0,GC,100.0\n"
        );

        let isochores = vec![Isochore {
            start: 0,
            end: 10,
            gc_content: 45.5,
        }];
        let iso_path = tempdir.path().join("iso.csv");
        isochores.write_csv(&iso_path).unwrap();
        assert_eq!(
            fs::read_to_string(&iso_path).unwrap(),
            "start,end,gcContent\n0,10,45.5\n"
        );
    }
}
