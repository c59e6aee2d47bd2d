//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timing value: {0}")]
    InvalidTiming(String),

    #[error("Invalid roast level: {0}")]
    InvalidRoastLevel(String),

    #[error("Invalid rating (must be 1-5): {0}")]
    InvalidRating(i64),

    #[error("Marker data error: {0}")]
    Markers(#[from] serde_json::Error),

    // ---------------------------
    // Validation / lookup errors
    // ---------------------------
    #[error("A name is required before saving")]
    EmptyName,

    #[error("No coffee bag found with id {0}")]
    BagNotFound(i64),

    #[error("No brew found with id {0}")]
    BrewNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
