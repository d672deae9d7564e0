use compseg_core::models::Isochore;
use compseg_core::progress::ProgressSink;
use log::{debug, info};

#[inline]
fn is_gc(base: u8) -> bool {
    matches!(base, b'G' | b'g' | b'C' | b'c')
}

///
/// Percentage of G and C letters over the length of `bases`. An empty
/// slice has a GC content of 0.
///
pub fn gc_content(bases: &[u8]) -> f64 {
    if bases.is_empty() {
        return 0.0;
    }
    let gc = bases.iter().filter(|&&b| is_gc(b)).count();
    gc as f64 * 100.0 / bases.len() as f64
}

/// `prefix[i]` is the number of G/C letters in `bases[..i]`.
pub fn build_gc_prefix(bases: &[u8]) -> Vec<usize> {
    let mut prefix = Vec::with_capacity(bases.len() + 1);
    let mut running = 0;
    prefix.push(running);
    for &base in bases {
        if is_gc(base) {
            running += 1;
        }
        prefix.push(running);
    }
    prefix
}

///
/// GC percentage of every full window `[i, i + window)` for
/// `i = 0, step, 2 * step, ...`.
///
/// A zero window or step, or a window longer than the sequence, yields
/// no records.
///
/// # Arguments
///
/// - bases: the sequence letters
/// - window: window length in bases
/// - step: distance between window starts
/// - progress: receives `(window start, len)` updates
///
pub fn gc_windows(
    bases: &[u8],
    window: usize,
    step: usize,
    progress: &dyn ProgressSink,
) -> Vec<Isochore> {
    let len = bases.len();
    if window == 0 || step == 0 || window > len {
        debug!(
            "No GC windows: window={}, step={}, sequence length={}",
            window, step, len
        );
        return Vec::new();
    }

    let prefix = build_gc_prefix(bases);
    let windows: Vec<Isochore> = (0..=len - window)
        .step_by(step)
        .map(|start| {
            let end = start + window;
            let gc = prefix[end] - prefix[start];
            progress.update(start, len);
            Isochore {
                start,
                end,
                gc_content: gc as f64 * 100.0 / window as f64,
            }
        })
        .collect();
    progress.update(len, len);

    info!(
        "Computed {} GC windows (window={}, step={})",
        windows.len(),
        window,
        step
    );
    windows
}
