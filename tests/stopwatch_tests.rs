//! Stopwatch engine, marker recorder and timeline mapping properties,
//! exercised through the library API.

use driplet::core::markers::MarkerRecorder;
use driplet::core::stopwatch::StopwatchEngine;
use driplet::core::timeline::{marker_position, progress_fill, reference_duration, render_bar};
use driplet::models::marker::TimeMarker;

fn ticks(engine: &mut StopwatchEngine, n: u32) {
    for _ in 0..n {
        engine.tick();
    }
}

// ---------------------------------------------------------------------------
// engine state machine
// ---------------------------------------------------------------------------

#[test]
fn tick_only_advances_while_running() {
    let mut engine = StopwatchEngine::new();

    ticks(&mut engine, 3);
    assert_eq!(engine.elapsed_seconds(), 0, "stopped engine must not advance");

    engine.start();
    ticks(&mut engine, 3);
    assert_eq!(engine.elapsed_seconds(), 3);

    engine.pause();
    ticks(&mut engine, 3);
    assert_eq!(engine.elapsed_seconds(), 3, "paused engine must not advance");
}

#[test]
fn start_twice_is_a_noop() {
    let mut engine = StopwatchEngine::new();
    engine.start();
    engine.start();

    assert!(engine.is_running());
    assert_eq!(engine.markers().len(), 1);
    assert_eq!(engine.markers()[0], TimeMarker::new("Start", 0));
}

#[test]
fn pause_twice_is_a_noop() {
    let mut engine = StopwatchEngine::new();
    engine.start();
    ticks(&mut engine, 2);
    engine.pause();
    let after_first = engine.markers().to_vec();
    engine.pause();

    assert!(!engine.is_running());
    assert_eq!(engine.markers(), after_first.as_slice());
}

#[test]
fn start_pause_cycles_at_zero_keep_single_boundaries() {
    let mut engine = StopwatchEngine::new();
    engine.start();
    engine.pause();
    engine.start();
    engine.pause();
    engine.start();

    // exactly one (0, "Start") and one (0, "End"), no duplicates
    let starts = engine
        .markers()
        .iter()
        .filter(|m| m.seconds == 0 && m.label == "Start")
        .count();
    let ends = engine
        .markers()
        .iter()
        .filter(|m| m.seconds == 0 && m.label == "End")
        .count();
    assert_eq!(starts, 1);
    assert_eq!(ends, 1);
    assert_eq!(engine.markers().len(), 2);
}

#[test]
fn reset_clears_markers_and_counter_mid_run() {
    let mut engine = StopwatchEngine::new();
    engine.start();
    ticks(&mut engine, 4);
    engine.add_marker("Bloom");
    engine.reset();

    assert_eq!(engine.elapsed_seconds(), 0);
    assert!(engine.markers().is_empty());
    assert!(!engine.is_running());
}

#[test]
fn finish_mid_run_records_end_and_keeps_elapsed() {
    let mut engine = StopwatchEngine::new();
    engine.start();
    ticks(&mut engine, 7);
    engine.finish();

    assert!(!engine.is_running());
    assert_eq!(engine.elapsed_seconds(), 7);
    assert!(
        engine
            .markers()
            .iter()
            .any(|m| m.seconds == 7 && m.label == "End")
    );
}

#[test]
fn finish_at_zero_adds_no_end_marker() {
    let mut engine = StopwatchEngine::new();
    engine.start();
    engine.finish();

    assert_eq!(engine.markers().len(), 1);
    assert_eq!(engine.markers()[0].label, "Start");
}

#[test]
fn bloom_scenario_yields_three_markers() {
    // start at t=0, tick x5, user marker "Bloom" at 5, pause at 5:
    // End is still appended because no (5, "End") pair exists yet.
    let mut engine = StopwatchEngine::new();
    engine.start();
    ticks(&mut engine, 5);
    engine.add_marker("Bloom");
    engine.pause();

    let expected = vec![
        TimeMarker::new("Start", 0),
        TimeMarker::new("Bloom", 5),
        TimeMarker::new("End", 5),
    ];
    assert_eq!(engine.markers(), expected.as_slice());
}

#[test]
fn user_markers_allow_duplicates() {
    let mut engine = StopwatchEngine::new();
    engine.start();
    ticks(&mut engine, 2);
    engine.add_marker("Pour");
    engine.add_marker("Pour");

    let pours = engine.markers().iter().filter(|m| m.label == "Pour").count();
    assert_eq!(pours, 2);
}

// ---------------------------------------------------------------------------
// marker recorder / label editing
// ---------------------------------------------------------------------------

#[test]
fn edit_labels_drops_whitespace_only_labels() {
    let mut recorder = MarkerRecorder::new();
    recorder.add_marker("Start", 0);
    recorder.add_marker("Bloom", 5);

    recorder.edit_labels(vec![
        TimeMarker::new("   ", 0),
        TimeMarker::new("", 5),
        TimeMarker::new("\t", 9),
    ]);
    assert!(recorder.is_empty());
}

#[test]
fn edit_labels_replaces_the_working_list() {
    let mut recorder = MarkerRecorder::new();
    recorder.add_marker("Start", 0);
    recorder.add_marker("", 5);

    recorder.edit_labels(vec![
        TimeMarker::new("Start", 0),
        TimeMarker::new("First pour", 5),
    ]);

    assert_eq!(recorder.len(), 2);
    assert_eq!(recorder.markers()[1], TimeMarker::new("First pour", 5));
}

#[test]
fn boundary_append_dedups_on_exact_pair_only() {
    let mut recorder = MarkerRecorder::new();
    recorder.add_marker("Bloom", 5);

    // same seconds, different label: still appended
    recorder.add_boundary("End", 5);
    assert_eq!(recorder.len(), 2);

    // exact duplicate: skipped
    recorder.add_boundary("End", 5);
    assert_eq!(recorder.len(), 2);
}

// ---------------------------------------------------------------------------
// timeline mapping
// ---------------------------------------------------------------------------

#[test]
fn zero_reference_duration_yields_zero() {
    assert_eq!(marker_position(10, 0), 0.0);
    assert_eq!(progress_fill(0, 0), 0.0);
}

#[test]
fn positions_are_normalized_and_clamped() {
    assert_eq!(marker_position(5, 10), 0.5);
    assert_eq!(marker_position(10, 10), 1.0);
    // marker beyond the fixed total clamps to 1
    assert_eq!(marker_position(20, 10), 1.0);
}

#[test]
fn reference_falls_back_to_elapsed_without_total() {
    assert_eq!(reference_duration(42, None), 42);
    assert_eq!(reference_duration(42, Some(60)), 60);
}

#[test]
fn render_bar_handles_empty_session() {
    let bar = render_bar(0, &[], None, 20);
    assert_eq!(bar.len(), 22); // brackets + cells
    assert!(!bar.contains('='));
}

#[test]
fn render_bar_places_marker_ticks() {
    let markers = vec![TimeMarker::new("Start", 0), TimeMarker::new("End", 10)];
    let bar = render_bar(10, &markers, Some(10), 20);

    // first and last cell carry marker ticks
    assert!(bar.starts_with("[|"));
    assert!(bar.ends_with("|]"));
}
