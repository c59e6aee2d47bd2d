//! Draft/commit flow: each add form owns its draft until it is committed
//! to the store. Validation (non-empty name) gates the commit, mirroring
//! the disabled save control; it is not a data-layer constraint.

use crate::errors::{AppError, AppResult};
use crate::models::bag::CoffeeBag;
use crate::models::brew::CoffeeBrew;
use crate::models::marker::TimeMarker;
use crate::models::roast_level::RoastLevel;
use crate::utils::formatting::format_timing;
use chrono::{Local, NaiveDate};

/// Draft state of the add-bag form.
#[derive(Debug, Default, Clone)]
pub struct BagDraft {
    pub name: String,
    pub roaster: String,
    pub origin: String,
    pub roast_date: Option<NaiveDate>,
    pub roast_level: Option<RoastLevel>,
    pub notes: String,
    pub photo: Option<Vec<u8>>,
}

impl BagDraft {
    /// Commit the draft into a persistable record.
    /// Fails with EmptyName when the name is blank (save stays disabled).
    pub fn commit(self, default_roast: RoastLevel) -> AppResult<CoffeeBag> {
        if self.name.trim().is_empty() {
            return Err(AppError::EmptyName);
        }
        Ok(CoffeeBag::new(
            self.name,
            self.roaster,
            self.origin,
            self.roast_date,
            self.roast_level.unwrap_or(default_roast),
            self.notes,
            self.photo,
        ))
    }
}

/// How the brew timing was entered.
#[derive(Debug, Clone)]
pub enum TimingSource {
    /// Manually picked minutes/seconds wheels.
    Manual { minutes: u32, seconds: u32 },
    /// Stopwatch result: total elapsed seconds plus the recorded markers.
    Stopwatch {
        elapsed_seconds: u32,
        markers: Vec<TimeMarker>,
    },
}

/// Draft state of the add-brew form.
#[derive(Debug, Default, Clone)]
pub struct BrewDraft {
    pub name: String,
    pub grind_size: String,
    pub method: String,
    pub notes: String,
    /// Raw rating as picked; 0 means "no rating" and is normalized away.
    pub rating: u8,
    pub photo: Option<Vec<u8>>,
}

impl BrewDraft {
    /// Commit the draft into a persistable record. The timing string is
    /// derived from the stopwatch counter or the manual wheels; a rating
    /// of 0 becomes None rather than being stored as 0.
    pub fn commit(self, timing: TimingSource) -> AppResult<CoffeeBrew> {
        if self.name.trim().is_empty() {
            return Err(AppError::EmptyName);
        }

        let (timing_str, markers) = match timing {
            TimingSource::Manual { minutes, seconds } => (format_timing(minutes, seconds), Vec::new()),
            TimingSource::Stopwatch {
                elapsed_seconds,
                markers,
            } => (
                format_timing(elapsed_seconds / 60, elapsed_seconds % 60),
                markers,
            ),
        };

        Ok(CoffeeBrew {
            id: 0,
            timestamp: Local::now(),
            name: self.name,
            grind_size: self.grind_size,
            method: self.method,
            timing: timing_str,
            notes: self.notes,
            rating: if self.rating == 0 { None } else { Some(self.rating) },
            markers,
            photo: self.photo,
        })
    }
}
