use crate::errors::{AppError, AppResult};
use crate::models::bag::CoffeeBag;
use crate::models::brew::CoffeeBrew;
use crate::models::marker::TimeMarker;
use crate::models::roast_level::RoastLevel;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

// ---------------------------------------------------------------------------
// Bags
// ---------------------------------------------------------------------------

pub fn map_bag_row(row: &Row) -> Result<CoffeeBag> {
    let roast_date: Option<String> = row.get("roast_date")?;
    let roast_date = match roast_date {
        Some(s) if !s.is_empty() => Some(
            NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidDate(s.clone())),
                )
            })?,
        ),
        _ => None,
    };

    let level_str: String = row.get("roast_level")?;
    let roast_level = RoastLevel::from_db_str(&level_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRoastLevel(level_str.clone())),
        )
    })?;

    Ok(CoffeeBag {
        id: row.get("id")?,
        name: row.get("name")?,
        roaster: row.get("roaster")?,
        origin: row.get("origin")?,
        roast_date,
        roast_level,
        notes: row.get("notes")?,
        photo: row.get("photo")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a bag and return its assigned id.
pub fn insert_bag(conn: &Connection, bag: &CoffeeBag) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO bags (name, roaster, origin, roast_date, roast_level, notes, photo, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            bag.name,
            bag.roaster,
            bag.origin,
            bag.roast_date_str(),
            bag.roast_level.to_db_str(),
            bag.notes,
            bag.photo,
            bag.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite all mutable fields of an existing bag.
pub fn update_bag(conn: &Connection, bag: &CoffeeBag) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE bags SET name = ?1, roaster = ?2, origin = ?3, roast_date = ?4,
                         roast_level = ?5, notes = ?6, photo = ?7
         WHERE id = ?8",
        params![
            bag.name,
            bag.roaster,
            bag.origin,
            bag.roast_date_str(),
            bag.roast_level.to_db_str(),
            bag.notes,
            bag.photo,
            bag.id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::BagNotFound(bag.id));
    }
    Ok(())
}

pub fn delete_bag(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM bags WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(AppError::BagNotFound(id));
    }
    Ok(())
}

pub fn get_bag(conn: &Connection, id: i64) -> AppResult<CoffeeBag> {
    let mut stmt = conn.prepare("SELECT * FROM bags WHERE id = ?1")?;
    let mut rows = stmt.query_map(params![id], map_bag_row)?;
    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::BagNotFound(id)),
    }
}

/// All bags, sorted by name ascending (the bag list screen ordering).
pub fn load_bags(conn: &Connection) -> AppResult<Vec<CoffeeBag>> {
    let mut stmt = conn.prepare("SELECT * FROM bags ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_bag_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Brews
// ---------------------------------------------------------------------------

pub fn map_brew_row(row: &Row) -> Result<CoffeeBrew> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp: DateTime<Local> = DateTime::parse_from_rfc3339(&ts_str)
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(ts_str.clone())),
            )
        })?
        .with_timezone(&Local);

    let markers_json: String = row.get("markers")?;
    let markers = TimeMarker::vec_from_json(&markers_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Markers(e)),
        )
    })?;

    let rating: Option<i64> = row.get("rating")?;

    Ok(CoffeeBrew {
        id: row.get("id")?,
        timestamp,
        name: row.get("name")?,
        grind_size: row.get("grind_size")?,
        method: row.get("method")?,
        timing: row.get("timing")?,
        notes: row.get("notes")?,
        rating: rating.map(|r| r as u8),
        markers,
        photo: row.get("photo")?,
    })
}

/// Insert a brew and return its assigned id.
pub fn insert_brew(conn: &Connection, brew: &CoffeeBrew) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO brews (timestamp, name, grind_size, method, timing, notes, rating, markers, photo)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            brew.timestamp.to_rfc3339(),
            brew.name,
            brew.grind_size,
            brew.method,
            brew.timing,
            brew.notes,
            brew.rating,
            TimeMarker::vec_to_json(&brew.markers)?,
            brew.photo,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_brew(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM brews WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(AppError::BrewNotFound(id));
    }
    Ok(())
}

pub fn get_brew(conn: &Connection, id: i64) -> AppResult<CoffeeBrew> {
    let mut stmt = conn.prepare("SELECT * FROM brews WHERE id = ?1")?;
    let mut rows = stmt.query_map(params![id], map_brew_row)?;
    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::BrewNotFound(id)),
    }
}

/// All brews, newest first (the brew list screen ordering).
pub fn load_brews(conn: &Connection) -> AppResult<Vec<CoffeeBrew>> {
    let mut stmt = conn.prepare("SELECT * FROM brews ORDER BY timestamp DESC, id DESC")?;
    let rows = stmt.query_map([], map_brew_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
