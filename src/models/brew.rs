use super::marker::TimeMarker;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A single coffee-preparation session and its outcome rating.
/// Brews are immutable after save; there is no edit path.
#[derive(Debug, Clone, Serialize)]
pub struct CoffeeBrew {
    pub id: i64,                      // ⇔ brews.id
    pub timestamp: DateTime<Local>,   // ⇔ brews.timestamp (TEXT, RFC3339, set at save)
    pub name: String,                 // ⇔ brews.name (required non-empty)
    pub grind_size: String,           // ⇔ brews.grind_size
    pub method: String,               // ⇔ brews.method (option set or free text)
    pub timing: String,               // ⇔ brews.timing ("minutes:seconds")
    pub notes: String,                // ⇔ brews.notes
    pub rating: Option<u8>,           // ⇔ brews.rating (1-5, NULL = unrated)
    pub markers: Vec<TimeMarker>,     // ⇔ brews.markers (TEXT, JSON array)
    #[serde(skip_serializing)]
    pub photo: Option<Vec<u8>>,       // ⇔ brews.photo (BLOB)
}

/// Fixed method picker options. Free text is accepted everywhere a
/// method is entered; this list only feeds help output.
pub const METHOD_OPTIONS: [&str; 8] = [
    "Pour Over",
    "French Press",
    "Espresso",
    "Aeropress",
    "Cold Brew",
    "Drip",
    "Moka Pot",
    "Siphon",
];

impl CoffeeBrew {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }
}
