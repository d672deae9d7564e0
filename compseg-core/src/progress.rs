//! Progress reporting for long running passes.
//!
//! Segmentation, merging and isochore detection take a [ProgressSink] and
//! call [ProgressSink::update] with the current position and the total
//! size of the work. A [ProgressReporter] can poll those updates from a
//! background thread and hand periodic [ProgressSnapshot]s to a display
//! callback, e.g. a console progress bar.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Receives position updates from the main computation.
pub trait ProgressSink {
    fn update(&self, current: usize, total: usize);
}

/// Sink that discards every update.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn update(&self, _current: usize, _total: usize) {}
}

impl<F> ProgressSink for F
where
    F: Fn(usize, usize),
{
    fn update(&self, current: usize, total: usize) {
        self(current, total)
    }
}

/// What the reporter hands to its display callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    pub current: usize,
    pub total: usize,
    pub elapsed: Duration,
}

impl ProgressSnapshot {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current as f64 / self.total as f64) * 100.0
    }

    /// Elapsed time as `Hh:Mm:Ss`.
    pub fn elapsed_string(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}h:{}m:{}s", hours, minutes, seconds)
}

#[derive(Default, Debug)]
struct Position {
    current: usize,
    total: usize,
}

///
/// Shared position counter. The computation writes it through
/// [ProgressSink]; readers take the same lock. The position never moves
/// backwards within a run.
///
#[derive(Clone, Default)]
pub struct ProgressCounter {
    position: Arc<Mutex<Position>>,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `(position, total)`.
    pub fn get(&self) -> (usize, usize) {
        let position = self.position.lock().unwrap_or_else(|e| e.into_inner());
        (position.current, position.total)
    }
}

impl ProgressSink for ProgressCounter {
    fn update(&self, current: usize, total: usize) {
        let mut position = self.position.lock().unwrap_or_else(|e| e.into_inner());
        position.current = position.current.max(current);
        position.total = total;
    }
}

///
/// Background thread that polls a [ProgressCounter] on a fixed interval and
/// forwards snapshots to `display` until [ProgressReporter::finish] is called
/// (or the reporter is dropped). A last snapshot is always delivered before
/// the thread exits so the display ends on the final position.
///
pub struct ProgressReporter {
    counter: ProgressCounter,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressReporter {
    pub fn start<F>(display: F) -> Self
    where
        F: Fn(ProgressSnapshot) + Send + 'static,
    {
        Self::start_with_interval(DEFAULT_POLL_INTERVAL, display)
    }

    pub fn start_with_interval<F>(interval: Duration, display: F) -> Self
    where
        F: Fn(ProgressSnapshot) + Send + 'static,
    {
        let counter = ProgressCounter::new();
        let running = Arc::new(AtomicBool::new(true));

        let thread_counter = counter.clone();
        let thread_running = Arc::clone(&running);
        let handle = thread::spawn(move || {
            let start_time = Instant::now();
            let snapshot = |counter: &ProgressCounter| {
                let (current, total) = counter.get();
                ProgressSnapshot {
                    current,
                    total,
                    elapsed: start_time.elapsed(),
                }
            };

            while thread_running.load(Ordering::Acquire) {
                thread::park_timeout(interval);
                if !thread_running.load(Ordering::Acquire) {
                    break;
                }
                display(snapshot(&thread_counter));
            }
            display(snapshot(&thread_counter));
        });

        ProgressReporter {
            counter,
            running,
            handle: Some(handle),
        }
    }

    /// The sink to pass into the computation.
    pub fn counter(&self) -> &ProgressCounter {
        &self.counter
    }

    /// Signal the polling thread to stop and wait for it.
    pub fn finish(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            let _ = handle.join();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.stop();
    }
}
