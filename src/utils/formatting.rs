//! Formatting utilities used for CLI outputs.

use crate::errors::{AppError, AppResult};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "minutes:seconds" timing string, seconds zero-padded (e.g. "3:05").
pub fn format_timing(minutes: u32, seconds: u32) -> String {
    format!("{}:{:02}", minutes, seconds)
}

/// Stopwatch display form, both fields zero-padded (e.g. "02:05").
pub fn format_seconds(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Parse a "minutes:seconds" timing string back into total seconds.
pub fn parse_timing(s: &str) -> AppResult<u32> {
    let (m, sec) = s
        .split_once(':')
        .ok_or_else(|| AppError::InvalidTiming(s.to_string()))?;
    let m: u32 = m
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidTiming(s.to_string()))?;
    let sec: u32 = sec
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidTiming(s.to_string()))?;
    if sec >= 60 {
        return Err(AppError::InvalidTiming(s.to_string()));
    }
    Ok(m * 60 + sec)
}

/// Star row for a 1-5 rating (e.g. "★★★☆☆").
pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    let mut out = String::new();
    for _ in 0..filled {
        out.push('★');
    }
    for _ in filled..5 {
        out.push('☆');
    }
    out
}
