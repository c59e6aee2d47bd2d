//! Marker recorder: the ordered label/offset timeline of a timing session.

use crate::models::marker::TimeMarker;

/// Labels of the synthetic boundary markers appended by the stopwatch.
pub const START_LABEL: &str = "Start";
pub const END_LABEL: &str = "End";

/// Append-only recorder for the markers of a single timing session.
/// Ordering is insertion order; `seconds` monotonicity is a convention of
/// how the stopwatch appends, not a constraint.
#[derive(Debug, Default, Clone)]
pub struct MarkerRecorder {
    markers: Vec<TimeMarker>,
}

impl MarkerRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[TimeMarker] {
        &self.markers
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Unconditional append, used for user-triggered markers during a run.
    /// Duplicates and out-of-order seconds are allowed.
    pub fn add_marker(&mut self, label: impl Into<String>, seconds: u32) {
        self.markers.push(TimeMarker::new(label, seconds));
    }

    /// Guarded append used by the stopwatch for the "Start"/"End" boundary
    /// markers: only appends if no marker already has exactly this
    /// (seconds, label) pair. Prevents duplicate boundaries across repeated
    /// pause/resume cycles at the same elapsed time.
    pub fn add_boundary(&mut self, label: &str, seconds: u32) {
        let exists = self
            .markers
            .iter()
            .any(|m| m.seconds == seconds && m.label == label);
        if !exists {
            self.markers.push(TimeMarker::new(label, seconds));
        }
    }

    /// Replace the working list with a caller-supplied revision (the
    /// post-recording label editor), then drop any marker whose label is
    /// empty or whitespace-only after trimming.
    pub fn edit_labels(&mut self, revised: Vec<TimeMarker>) {
        self.markers = revised
            .into_iter()
            .filter(|m| !m.label.trim().is_empty())
            .collect();
    }

    /// Empty the sequence (stopwatch reset).
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn into_markers(self) -> Vec<TimeMarker> {
        self.markers
    }
}
