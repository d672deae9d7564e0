//! Output file names of the command line pipeline.
use std::path::{Path, PathBuf};

use crate::consts::{
    CSV_EXTENSION, GC_SEGMENTS_PREFIX, GZ_EXTENSION, ISOCHORES_PREFIX, MERGED_SEGMENTS_PREFIX,
    PAIR_ISOCHORES_PREFIX, SEGMENTS_PREFIX,
};

fn file_name<P: ToString>(prefix: &str, params: &[P], gzip: bool) -> String {
    let mut name = prefix.to_string();
    for param in params {
        name.push('_');
        name.push_str(&param.to_string());
    }
    name.push('.');
    name.push_str(CSV_EXTENSION);
    if gzip {
        name.push('.');
        name.push_str(GZ_EXTENSION);
    }
    name
}

/// `segments_output_{m}_{w}_{l}.csv`
pub fn segments_file(dir: &Path, m: usize, w: usize, l: usize, gzip: bool) -> PathBuf {
    dir.join(file_name(SEGMENTS_PREFIX, &[m, w, l], gzip))
}

/// `merged_segments_output_{m}_{w}_{l}.csv`
pub fn merged_segments_file(dir: &Path, m: usize, w: usize, l: usize, gzip: bool) -> PathBuf {
    dir.join(file_name(MERGED_SEGMENTS_PREFIX, &[m, w, l], gzip))
}

/// `segments_GcContent_output_{m}_{w}_{l}.csv`
pub fn gc_segments_file(dir: &Path, m: usize, w: usize, l: usize, gzip: bool) -> PathBuf {
    dir.join(file_name(GC_SEGMENTS_PREFIX, &[m, w, l], gzip))
}

/// `isochores_output_{window}_{step}.csv`
pub fn isochores_file(dir: &Path, window: usize, step: usize, gzip: bool) -> PathBuf {
    dir.join(file_name(ISOCHORES_PREFIX, &[window, step], gzip))
}

/// `isochores_{window}_{threshold}.csv`, for GC/CG pair isochores
pub fn pair_isochores_file(dir: &Path, window: usize, threshold: f64, gzip: bool) -> PathBuf {
    let params = [window.to_string(), threshold.to_string()];
    dir.join(file_name(PAIR_ISOCHORES_PREFIX, &params, gzip))
}
