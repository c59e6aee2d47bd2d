use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{drip, init_db_with_bags, setup_test_db};

// ---------------------------------------------------------------------------
// init & empty lists
// ---------------------------------------------------------------------------

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Initializing driplet"));

    drip()
        .args(["--db", &db_path, "bag", "list"])
        .assert()
        .success()
        .stdout(contains("No bags yet"));

    drip()
        .args(["--db", &db_path, "brew", "list"])
        .assert()
        .success()
        .stdout(contains("No brews yet"));
}

// ---------------------------------------------------------------------------
// bags
// ---------------------------------------------------------------------------

#[test]
fn test_bag_add_and_list() {
    let db_path = setup_test_db("bag_add_list");
    init_db_with_bags(&db_path);

    drip()
        .args(["--db", &db_path, "bag", "list"])
        .assert()
        .success()
        .stdout(contains("Ethiopia Yirgacheffe"))
        .stdout(contains("Brazil Cerrado"))
        .stdout(contains("Little Wolf"));
}

#[test]
fn test_bag_list_sorted_by_name() {
    let db_path = setup_test_db("bag_sorted");
    init_db_with_bags(&db_path);

    let output = drip()
        .args(["--db", &db_path, "bag", "list"])
        .output()
        .expect("run bag list");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let brazil = stdout.find("Brazil Cerrado").expect("Brazil row");
    let ethiopia = stdout.find("Ethiopia Yirgacheffe").expect("Ethiopia row");
    assert!(brazil < ethiopia, "bags must be sorted by name ascending");
}

#[test]
fn test_bag_roast_filter() {
    let db_path = setup_test_db("bag_filter");
    init_db_with_bags(&db_path);

    drip()
        .args(["--db", &db_path, "bag", "list", "--roast", "dark"])
        .assert()
        .success()
        .stdout(contains("Roast filter: Dark"))
        .stdout(contains("Brazil Cerrado"))
        .stdout(contains("Ethiopia Yirgacheffe").not());
}

#[test]
fn test_bag_dark_badge_shows_short_name() {
    // roastLevel=dark renders displayName "Dark" (filter echo) and
    // shortName "D" (badge column).
    let db_path = setup_test_db("bag_badge");
    init_db_with_bags(&db_path);

    drip()
        .args(["--db", &db_path, "bag", "list", "--roast", "D"])
        .assert()
        .success()
        .stdout(contains("Roast filter: Dark"))
        .stdout(contains(" D "));
}

#[test]
fn test_bag_add_empty_name_is_rejected() {
    let db_path = setup_test_db("bag_empty_name");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    drip()
        .args(["--db", &db_path, "bag", "add", "--name", ""])
        .assert()
        .failure()
        .stderr(contains("A name is required"));

    // no record was created
    drip()
        .args(["--db", &db_path, "bag", "list"])
        .assert()
        .success()
        .stdout(contains("No bags yet"));
}

#[test]
fn test_bag_add_invalid_roast_level() {
    let db_path = setup_test_db("bag_bad_roast");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    drip()
        .args([
            "--db", &db_path, "bag", "add", "--name", "Test", "--roast", "burnt",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid roast level"));
}

#[test]
fn test_bag_edit_keeps_unspecified_fields() {
    let db_path = setup_test_db("bag_edit");
    init_db_with_bags(&db_path);

    drip()
        .args([
            "--db",
            &db_path,
            "bag",
            "edit",
            "1",
            "--roaster",
            "Heart Roasters",
        ])
        .assert()
        .success()
        .stdout(contains("Updated bag #1"));

    drip()
        .args(["--db", &db_path, "bag", "list"])
        .assert()
        .success()
        .stdout(contains("Heart Roasters"))
        .stdout(contains("Ethiopia Yirgacheffe"));
}

#[test]
fn test_bag_edit_empty_name_is_rejected() {
    let db_path = setup_test_db("bag_edit_empty");
    init_db_with_bags(&db_path);

    drip()
        .args(["--db", &db_path, "bag", "edit", "1", "--name", ""])
        .assert()
        .failure()
        .stderr(contains("A name is required"));
}

#[test]
fn test_bag_del() {
    let db_path = setup_test_db("bag_del");
    init_db_with_bags(&db_path);

    drip()
        .args(["--db", &db_path, "bag", "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    drip()
        .args(["--db", &db_path, "bag", "list"])
        .assert()
        .success()
        .stdout(contains("Brazil Cerrado"))
        .stdout(contains("Ethiopia Yirgacheffe").not());
}

#[test]
fn test_bag_del_unknown_id() {
    let db_path = setup_test_db("bag_del_unknown");
    init_db_with_bags(&db_path);

    drip()
        .args(["--db", &db_path, "bag", "del", "99", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No coffee bag found with id 99"));
}

// ---------------------------------------------------------------------------
// brews
// ---------------------------------------------------------------------------

#[test]
fn test_brew_add_manual_timing() {
    let db_path = setup_test_db("brew_manual");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    drip()
        .args([
            "--db",
            &db_path,
            "brew",
            "add",
            "--name",
            "Morning V60",
            "--method",
            "pour over",
            "--minutes",
            "3",
            "--seconds",
            "30",
            "--rating",
            "4",
        ])
        .assert()
        .success()
        .stdout(contains("3:30"));

    drip()
        .args(["--db", &db_path, "brew", "list"])
        .assert()
        .success()
        .stdout(contains("Morning V60"))
        // free text snapped onto the fixed option set
        .stdout(contains("Pour Over"))
        .stdout(contains("3:30"))
        .stdout(contains("★★★★☆"));
}

#[test]
fn test_brew_add_empty_name_is_rejected() {
    let db_path = setup_test_db("brew_empty_name");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // name="", stopwatch unused, minutes=3 seconds=30: save must be
    // blocked and no record created.
    drip()
        .args([
            "--db", &db_path, "brew", "add", "--name", "", "--minutes", "3", "--seconds", "30",
        ])
        .assert()
        .failure()
        .stderr(contains("A name is required"));

    drip()
        .args(["--db", &db_path, "brew", "list"])
        .assert()
        .success()
        .stdout(contains("No brews yet"));
}

#[test]
fn test_brew_add_invalid_seconds() {
    let db_path = setup_test_db("brew_bad_seconds");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    drip()
        .args([
            "--db", &db_path, "brew", "add", "--name", "Oops", "--minutes", "1", "--seconds", "75",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid timing"));
}

#[test]
fn test_brew_add_invalid_rating() {
    let db_path = setup_test_db("brew_bad_rating");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    drip()
        .args([
            "--db", &db_path, "brew", "add", "--name", "Oops", "--rating", "9",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid rating"));
}

#[test]
fn test_brew_rating_zero_means_unrated() {
    let db_path = setup_test_db("brew_unrated");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    drip()
        .args([
            "--db", &db_path, "brew", "add", "--name", "Quick Cup", "--rating", "0",
        ])
        .assert()
        .success();

    drip()
        .args(["--db", &db_path, "brew", "show", "1"])
        .assert()
        .success()
        .stdout(contains("Quick Cup"))
        .stdout(contains("Rating").not());
}

#[test]
fn test_brew_show_details() {
    let db_path = setup_test_db("brew_show");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    drip()
        .args([
            "--db",
            &db_path,
            "brew",
            "add",
            "--name",
            "Evening Press",
            "--method",
            "French Press",
            "--grind",
            "coarse",
            "--minutes",
            "4",
            "--seconds",
            "0",
            "--notes",
            "steeped a bit long",
        ])
        .assert()
        .success();

    drip()
        .args(["--db", &db_path, "brew", "show", "1"])
        .assert()
        .success()
        .stdout(contains("Evening Press"))
        .stdout(contains("French Press"))
        .stdout(contains("coarse"))
        .stdout(contains("4:00"))
        .stdout(contains("steeped a bit long"));
}

#[test]
fn test_brew_stopwatch_session_piped_input() {
    let db_path = setup_test_db("brew_stopwatch");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // start, drop a marker, done immediately: elapsed stays 0, the marker
    // row echoes as "MM:SS label", timing becomes "0:00".
    drip()
        .args([
            "--db",
            &db_path,
            "brew",
            "add",
            "--name",
            "Timed Cup",
            "--stopwatch",
        ])
        .write_stdin("s\nm Bloom\nd\n")
        .assert()
        .success()
        .stdout(contains("00:00  Bloom"))
        .stdout(contains("0:00"));

    drip()
        .args(["--db", &db_path, "brew", "show", "1"])
        .assert()
        .success()
        .stdout(contains("Timed Cup"))
        .stdout(contains("Start"))
        .stdout(contains("Bloom"));
}

#[test]
fn test_brew_del() {
    let db_path = setup_test_db("brew_del");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    drip()
        .args(["--db", &db_path, "brew", "add", "--name", "Gone Soon"])
        .assert()
        .success();

    drip()
        .args(["--db", &db_path, "brew", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    drip()
        .args(["--db", &db_path, "brew", "list"])
        .assert()
        .success()
        .stdout(contains("No brews yet"));
}

#[test]
fn test_brew_del_unknown_id() {
    let db_path = setup_test_db("brew_del_unknown");

    drip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    drip()
        .args(["--db", &db_path, "brew", "del", "7", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No brew found with id 7"));
}

// ---------------------------------------------------------------------------
// journal
// ---------------------------------------------------------------------------

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("journal");
    init_db_with_bags(&db_path);

    // operation padded to 10 columns, then the target row id
    drip()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("bag.add    1"))
        .stdout(contains("bag.add    2"))
        .stdout(contains("Ethiopia Yirgacheffe"));
}
