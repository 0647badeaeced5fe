//! Percentage progress notices for long fetch loops.
//!
//! A notice is emitted each time the completed percentage has moved at least
//! five points past the last notice. The percentage is truncated, never
//! rounded, so 29 of 100 can report 28 exactly as a float division would.

use std::io::{self, Stdout, Write};

use tracing::debug;

/// Minimum percentage gain between two notices.
const PROGRESS_STEP: u32 = 5;

/// Counts finished items and writes `NN%` lines to an optional sink.
#[derive(Debug)]
pub struct Progress<W = Stdout> {
    stage: &'static str,
    total: usize,
    done: usize,
    last_reported: u32,
    sink: Option<W>,
}

impl Progress<Stdout> {
    /// Notices go to stdout when `show` is set, otherwise only to the trace.
    pub fn stdout(stage: &'static str, total: usize, show: bool) -> Self {
        Self::new(stage, total, show.then(io::stdout))
    }
}

impl<W: Write> Progress<W> {
    pub fn new(stage: &'static str, total: usize, sink: Option<W>) -> Self {
        Self {
            stage,
            total,
            done: 0,
            last_reported: 0,
            sink,
        }
    }

    /// Count one finished item. Returns the percentage when a notice is due.
    pub fn tick(&mut self) -> Option<u32> {
        self.done += 1;
        if self.total == 0 {
            return None;
        }

        let percent = percent_of(self.done, self.total);
        if percent.saturating_sub(self.last_reported) < PROGRESS_STEP {
            return None;
        }

        self.last_reported = percent;
        debug!(stage = self.stage, percent, "Progress");
        if let Some(out) = self.sink.as_mut() {
            // A closed stdout must not abort the run
            if let Err(e) = writeln!(out, "{}%", percent).and_then(|_| out.flush()) {
                debug!(stage = self.stage, error = %e, "Progress notice not written");
            }
        }
        Some(percent)
    }

    pub fn into_sink(self) -> Option<W> {
        self.sink
    }
}

fn percent_of(done: usize, total: usize) -> u32 {
    ((done as f64 / total as f64) * 100.0) as u32
}
