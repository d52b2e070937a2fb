//! Terminal progress bars for pipeline stages.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use rummy_lib::ProgressSink;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";
const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

/// One indicatif bar per pipeline stage.
#[derive(Debug)]
pub(crate) struct BarProgress {
    multi: MultiProgress,
    current: Mutex<ProgressBar>,
}

impl BarProgress {
    /// Creates the display; in quiet mode nothing is drawn.
    pub(crate) fn new(quiet: bool) -> Self {
        let multi = if quiet {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        };
        Self {
            multi,
            current: Mutex::new(ProgressBar::hidden()),
        }
    }

    /// Returns the shared display, e.g. to suspend it around prompts.
    pub(crate) fn multi(&self) -> MultiProgress {
        self.multi.clone()
    }

    fn current(&self) -> MutexGuard<'_, ProgressBar> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
}

impl ProgressSink for BarProgress {
    fn start(&self, label: &str, total: Option<u64>) {
        let bar = match total {
            Some(len) => ProgressBar::new(len).with_style(style(BAR_TEMPLATE)),
            None => {
                let spinner = ProgressBar::new_spinner().with_style(style(SPINNER_TEMPLATE));
                spinner.enable_steady_tick(Duration::from_millis(100));
                spinner
            }
        };
        bar.set_message(label.to_string());
        *self.current() = self.multi.add(bar);
    }

    fn advance(&self, n: u64) {
        self.current().inc(n);
    }

    fn finish(&self, message: &str) {
        self.current().finish_with_message(message.to_string());
    }
}
