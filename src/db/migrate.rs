//! Schema migrations. All tables are created and upgraded here; nothing
//! else in the codebase issues DDL.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Bring a database, fresh or inherited from an older driplet, up to the
/// current schema.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `bags` table has a `roast_level` column.
fn bags_has_roast_level_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('bags')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "roast_level" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `bags` table with the modern schema (including `roast_level`).
fn create_bags_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS bags (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            roaster      TEXT NOT NULL DEFAULT '',
            origin       TEXT NOT NULL DEFAULT '',
            roast_date   TEXT,
            roast_level  TEXT NOT NULL DEFAULT 'medium'
                         CHECK(roast_level IN ('light','light-medium','medium','medium-dark','dark')),
            notes        TEXT NOT NULL DEFAULT '',
            photo        BLOB,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_bags_name ON bags(name);
        "#,
    )?;
    Ok(())
}

/// Create the `brews` table. Markers live in a JSON array column.
fn create_brews_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS brews (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp    TEXT NOT NULL,
            name         TEXT NOT NULL,
            grind_size   TEXT NOT NULL DEFAULT '',
            method       TEXT NOT NULL DEFAULT '',
            timing       TEXT NOT NULL DEFAULT '',
            notes        TEXT NOT NULL DEFAULT '',
            rating       INTEGER CHECK(rating BETWEEN 1 AND 5),
            markers      TEXT NOT NULL DEFAULT '[]',
            photo        BLOB
        );

        CREATE INDEX IF NOT EXISTS idx_brews_timestamp ON brews(timestamp);
        "#,
    )?;
    Ok(())
}

/// Migrate a first-iteration `bags` table (no roast level) to the modern
/// schema. Existing rows default to 'medium'.
fn migrate_add_roast_level_to_bags(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "bags")? {
        return Ok(()); // no table, nothing to migrate
    }

    if bags_has_roast_level_column(conn)? {
        return Ok(()); // already present
    }

    warning("Adding 'roast_level' column to bags table...");

    conn.execute_batch(
        r#"
        BEGIN;

        ALTER TABLE bags ADD COLUMN roast_level TEXT NOT NULL DEFAULT 'medium'
            CHECK(roast_level IN ('light','light-medium','medium','medium-dark','dark'));

        COMMIT;
        "#,
    )?;
    Ok(())
}

/// Run every pending migration, in order. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_add_roast_level_to_bags(conn)?;
    create_bags_table(conn)?;
    create_brews_table(conn)?;
    Ok(())
}
