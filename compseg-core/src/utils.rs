use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use log::{debug, info};

use crate::errors::SequenceError;
use crate::models::Sequence;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, SequenceError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)
        .map_err(|e| SequenceError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

fn fasta_records(path: &Path) -> Result<fasta::Records<BufReader<Box<dyn Read>>>, SequenceError> {
    let reader = get_dynamic_reader(path)?;
    Ok(fasta::Reader::from_bufread(reader).records())
}

///
/// Load every record of a FASTA file (optionally gzipped).
///
/// # Arguments
///
/// - path: path to the FASTA file
///
pub fn load_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>, SequenceError> {
    let path = path.as_ref();
    let mut sequences = Vec::new();

    for record in fasta_records(path)? {
        let record = record.map_err(|e| SequenceError::FastaParseError(e.to_string()))?;
        debug!("Read record {} ({} bp)", record.id(), record.seq().len());
        sequences.push(Sequence::new(record.id(), record.seq().to_vec()));
    }

    if sequences.is_empty() {
        return Err(SequenceError::EmptySequenceFile(path.display().to_string()));
    }

    Ok(sequences)
}

///
/// Load a whole genome as one sequence: all records of the FASTA file are
/// concatenated in file order. Records are appended to a single buffer as
/// they are read, so the genome is held in memory once.
///
pub fn load_full_genome<P: AsRef<Path>>(path: P) -> Result<Sequence, SequenceError> {
    let path = path.as_ref();
    let mut bases = Vec::new();
    let mut count = 0;

    for record in fasta_records(path)? {
        let record = record.map_err(|e| SequenceError::FastaParseError(e.to_string()))?;
        debug!("Read record {} ({} bp)", record.id(), record.seq().len());
        bases.extend_from_slice(record.seq());
        count += 1;
    }

    if count == 0 {
        return Err(SequenceError::EmptySequenceFile(path.display().to_string()));
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("genome")
        .to_string();
    let genome = Sequence::new(name, bases);

    info!(
        "Loaded {} records ({} bp) from {}",
        count,
        genome.len(),
        path.display()
    );
    Ok(genome)
}

///
/// Read one chromosome out of a multi-record FASTA file. The first record
/// whose identifier or description contains `chromosome` is returned.
///
pub fn read_chromosome<P: AsRef<Path>>(
    path: P,
    chromosome: &str,
) -> Result<Sequence, SequenceError> {
    for record in fasta_records(path.as_ref())? {
        let record = record.map_err(|e| SequenceError::FastaParseError(e.to_string()))?;
        let in_desc = record.desc().is_some_and(|d| d.contains(chromosome));
        if record.id().contains(chromosome) || in_desc {
            info!("Found chromosome {} ({} bp)", record.id(), record.seq().len());
            return Ok(Sequence::new(record.id(), record.seq().to_vec()));
        }
    }

    Err(SequenceError::ChromosomeNotFound(chromosome.to_string()))
}

///
/// Read a single-chromosome FASTA file. Only the first record is used.
///
pub fn read_chromosome_file<P: AsRef<Path>>(path: P) -> Result<Sequence, SequenceError> {
    let path = path.as_ref();
    match fasta_records(path)?.next() {
        Some(record) => {
            let record = record.map_err(|e| SequenceError::FastaParseError(e.to_string()))?;
            info!("Loaded chromosome {} ({} bp)", record.id(), record.seq().len());
            Ok(Sequence::new(record.id(), record.seq().to_vec()))
        }
        None => Err(SequenceError::EmptySequenceFile(path.display().to_string())),
    }
}

///
/// Load the `ORIGIN` block of a GenBank flat file. Position numbers and
/// spacing are dropped, as are `N` bases.
///
pub fn load_genbank<P: AsRef<Path>>(path: P) -> Result<Sequence, SequenceError> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;

    let mut name = String::from("genbank");
    let mut bases = Vec::new();
    let mut in_origin = false;

    for line in reader.lines() {
        let line = line?;

        if !in_origin {
            if let Some(locus) = line.strip_prefix("LOCUS") {
                if let Some(locus_name) = locus.split_whitespace().next() {
                    name = locus_name.to_string();
                }
            } else if line.starts_with("ORIGIN") {
                in_origin = true;
            }
            continue;
        }

        if line.starts_with("//") {
            break;
        }
        bases.extend(
            line.bytes()
                .filter(|b| b.is_ascii_alphabetic() && !b.eq_ignore_ascii_case(&b'N')),
        );
    }

    if bases.is_empty() {
        return Err(SequenceError::EmptySequenceFile(path.display().to_string()));
    }

    Ok(Sequence::new(name, bases))
}

///
/// Load a file that holds nothing but sequence letters (e.g. a genome that
/// was previously stripped of headers and saved).
///
pub fn load_plain_sequence<P: AsRef<Path>>(path: P) -> Result<Sequence, SequenceError> {
    let path = path.as_ref();
    let mut bases = Vec::new();
    get_dynamic_reader(path)?.read_to_end(&mut bases)?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sequence")
        .to_string();
    Ok(Sequence::new(name, bases))
}

///
/// Split a multi-record FASTA file into one `<id>.fna` file per record.
///
/// # Arguments
///
/// - path: the FASTA file to split
/// - out_dir: directory receiving the chromosome files (created if missing)
///
/// # Returns
///
/// The paths of the written files, in record order.
pub fn extract_all_chromosomes<P: AsRef<Path>, Q: AsRef<Path>>(
    path: P,
    out_dir: Q,
) -> Result<Vec<PathBuf>, SequenceError> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for record in fasta_records(path.as_ref())? {
        let record = record.map_err(|e| SequenceError::FastaParseError(e.to_string()))?;
        let out_path = out_dir.join(format!("{}.fna", record.id()));

        let mut writer = fasta::Writer::to_file(&out_path)?;
        writer.write_record(&record)?;
        writer.flush()?;

        info!("Saving: {}", out_path.display());
        written.push(out_path);
    }

    Ok(written)
}
