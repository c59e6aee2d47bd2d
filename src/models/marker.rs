use serde::{Deserialize, Serialize};

/// A labeled timestamp within a brew's timing session (e.g. pour start/stop).
/// Ordering is insertion order; `seconds` is the offset from stopwatch start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeMarker {
    pub label: String,
    pub seconds: u32,
}

impl TimeMarker {
    pub fn new(label: impl Into<String>, seconds: u32) -> Self {
        Self {
            label: label.into(),
            seconds,
        }
    }

    /// Markers are stored in a single JSON column on the brew row.
    pub fn vec_to_json(markers: &[TimeMarker]) -> serde_json::Result<String> {
        serde_json::to_string(markers)
    }

    pub fn vec_from_json(raw: &str) -> serde_json::Result<Vec<TimeMarker>> {
        serde_json::from_str(raw)
    }
}
