use super::roast_level::RoastLevel;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// A purchased quantity of coffee with roast metadata.
#[derive(Debug, Clone, Serialize)]
pub struct CoffeeBag {
    pub id: i64,               // ⇔ bags.id (assigned by SQLite at insert)
    pub name: String,          // ⇔ bags.name (required non-empty)
    pub roaster: String,       // ⇔ bags.roaster
    pub origin: String,        // ⇔ bags.origin
    pub roast_date: Option<NaiveDate>, // ⇔ bags.roast_date (TEXT "YYYY-MM-DD")
    pub roast_level: RoastLevel, // ⇔ bags.roast_level
    pub notes: String,         // ⇔ bags.notes
    #[serde(skip_serializing)]
    pub photo: Option<Vec<u8>>, // ⇔ bags.photo (BLOB)
    pub created_at: String,    // ⇔ bags.created_at (TEXT, ISO8601)
}

impl CoffeeBag {
    /// High-level constructor for bags created from the CLI.
    /// `id` is 0 until the row is inserted; `created_at` is set to now.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        roaster: String,
        origin: String,
        roast_date: Option<NaiveDate>,
        roast_level: RoastLevel,
        notes: String,
        photo: Option<Vec<u8>>,
    ) -> Self {
        Self {
            id: 0,
            name,
            roaster,
            origin,
            roast_date,
            roast_level,
            notes,
            photo,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn roast_date_str(&self) -> Option<String> {
        self.roast_date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}
