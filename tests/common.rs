#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn drip() -> Command {
    cargo_bin_cmd!("driplet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_driplet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_bags(db_path: &str) {
    // init DB (creates tables)
    drip()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    drip()
        .args([
            "--db",
            db_path,
            "bag",
            "add",
            "--name",
            "Ethiopia Yirgacheffe",
            "--roaster",
            "Little Wolf",
            "--origin",
            "Ethiopia",
            "--roast",
            "light",
        ])
        .assert()
        .success();

    drip()
        .args([
            "--db",
            db_path,
            "bag",
            "add",
            "--name",
            "Brazil Cerrado",
            "--roaster",
            "Counter Culture",
            "--origin",
            "Brazil",
            "--roast",
            "dark",
        ])
        .assert()
        .success();
}

/// Open the library store directly, with the schema guaranteed.
pub fn open_store(db_path: &str) -> driplet::db::store::Store {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    driplet::db::migrate::init_db(&conn).expect("init db");
    drop(conn);
    driplet::db::store::Store::open(db_path).expect("open store")
}
