//! Stopwatch engine for timing a brew session.
//!
//! The engine is a pure state machine: it owns the elapsed-seconds counter,
//! the running flag and the marker recorder, and is advanced by `tick()`.
//! The interactive session (core::session) is the only scheduler: it calls
//! `tick()` once per elapsed second on the main loop, so ticks never overlap
//! and pausing simply stops the calls.

use crate::core::markers::{END_LABEL, MarkerRecorder, START_LABEL};
use crate::models::marker::TimeMarker;

#[derive(Debug, Default)]
pub struct StopwatchEngine {
    elapsed_seconds: u32,
    running: bool,
    recorder: MarkerRecorder,
}

impl StopwatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn markers(&self) -> &[TimeMarker] {
        self.recorder.markers()
    }

    /// Start the stopwatch. No-op if already running.
    /// Appends the "Start" boundary at 0 if not already present.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.recorder.add_boundary(START_LABEL, 0);
        self.running = true;
    }

    /// Pause the stopwatch. No-op if not running.
    /// Appends the "End" boundary at the current elapsed time if not present.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.recorder.add_boundary(END_LABEL, self.elapsed_seconds);
        self.running = false;
    }

    /// Reset to zero. If mid-run, the "End" boundary is recorded first
    /// (same rule as pause), then the counter and all markers are cleared.
    pub fn reset(&mut self) {
        if self.running && self.elapsed_seconds > 0 {
            self.recorder.add_boundary(END_LABEL, self.elapsed_seconds);
        }
        self.running = false;
        self.elapsed_seconds = 0;
        self.recorder.clear();
    }

    /// Close the timing session: record the "End" boundary if mid-run and
    /// stop, but keep the elapsed counter (it becomes the brew timing).
    pub fn finish(&mut self) {
        if self.running && self.elapsed_seconds > 0 {
            self.recorder.add_boundary(END_LABEL, self.elapsed_seconds);
        }
        self.running = false;
    }

    /// Advance the counter by one second. Called by the session loop once
    /// per second while running; ignored when stopped.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_seconds += 1;
        }
    }

    /// User-triggered marker at the current elapsed time (unconditional).
    pub fn add_marker(&mut self, label: impl Into<String>) {
        self.recorder.add_marker(label, self.elapsed_seconds);
    }

    /// Post-recording label revision, see [`MarkerRecorder::edit_labels`].
    pub fn edit_labels(&mut self, revised: Vec<TimeMarker>) {
        self.recorder.edit_labels(revised);
    }

    /// Consume the engine, yielding the final (elapsed, markers) pair.
    pub fn into_result(self) -> (u32, Vec<TimeMarker>) {
        (self.elapsed_seconds, self.recorder.into_markers())
    }
}
