use compseg_core::progress::{ProgressReporter, ProgressSink};
use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str = "{prefix:>12} [{elapsed_precise}] {bar:40.cyan/blue} {msg}";

///
/// Run `task` with a console progress bar fed by a background
/// [ProgressReporter].
///
pub fn with_progress<T>(label: &str, task: impl FnOnce(&dyn ProgressSink) -> T) -> T {
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template(BAR_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_prefix(label.to_string());

    let display = bar.clone();
    let reporter = ProgressReporter::start(move |snapshot| {
        display.set_length(snapshot.total as u64);
        display.set_position(snapshot.current as u64);
        display.set_message(format!(
            "{:.4}% completed. Elapsed time: {}",
            snapshot.percentage(),
            snapshot.elapsed_string()
        ));
    });

    let result = task(reporter.counter());
    reporter.finish();
    bar.finish();

    result
}
