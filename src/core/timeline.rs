//! Timeline mapping: elapsed time and markers onto normalized 0..1
//! positions, plus the ASCII progress bar used by the terminal UI.

use crate::models::marker::TimeMarker;

/// Reference duration used for normalization: the fixed total when one is
/// supplied, otherwise the running elapsed time.
pub fn reference_duration(elapsed_seconds: u32, total: Option<u32>) -> u32 {
    total.unwrap_or(elapsed_seconds)
}

/// Normalized position of a marker, clamped to [0, 1].
/// A zero reference yields 0 (no division).
pub fn marker_position(seconds: u32, reference: u32) -> f64 {
    if reference == 0 {
        return 0.0;
    }
    (seconds as f64 / reference as f64).clamp(0.0, 1.0)
}

/// Normalized progress-bar fill, clamped to [0, 1]; zero reference yields 0.
pub fn progress_fill(elapsed_seconds: u32, reference: u32) -> f64 {
    marker_position(elapsed_seconds, reference)
}

/// Render the progress bar with marker ticks for the terminal, `width`
/// cells wide. Filled cells are '=', marker positions '|', the rest '-'.
pub fn render_bar(
    elapsed_seconds: u32,
    markers: &[TimeMarker],
    total: Option<u32>,
    width: usize,
) -> String {
    let width = width.max(1);
    let reference = reference_duration(elapsed_seconds, total);

    let fill_cells = (progress_fill(elapsed_seconds, reference) * width as f64).round() as usize;
    let mut cells: Vec<char> = (0..width)
        .map(|i| if i < fill_cells { '=' } else { '-' })
        .collect();

    for m in markers {
        let pos = marker_position(m.seconds, reference);
        let idx = ((pos * (width - 1) as f64).round() as usize).min(width - 1);
        cells[idx] = '|';
    }

    let bar: String = cells.into_iter().collect();
    format!("[{}]", bar)
}
