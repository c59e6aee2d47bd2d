use crate::cli::parser::{BrewCommands, Commands};
use crate::config::Config;
use crate::core::draft::{BrewDraft, TimingSource};
use crate::core::session::TimingSession;
use crate::core::timeline::render_bar;
use crate::db::store::{Change, Store};
use crate::errors::{AppError, AppResult};
use crate::models::brew::METHOD_OPTIONS;
use crate::ui::messages::{ask_confirmation, info, success};
use crate::utils::formatting::{bold, format_seconds, parse_timing, rating_stars};
use crate::utils::photo::{describe_photo, load_photo};
use crate::utils::table::{Column, Table, fit_width};

use super::bag::labeled;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Brew { action } = cmd else {
        return Ok(());
    };

    match action {
        BrewCommands::Add {
            name,
            grind_size,
            method,
            minutes,
            seconds,
            stopwatch,
            notes,
            rating,
            photo,
        } => add(
            cfg, name, grind_size, method, *minutes, *seconds, *stopwatch, notes, *rating, photo,
        ),
        BrewCommands::List => list(cfg),
        BrewCommands::Show { id } => show(cfg, *id),
        BrewCommands::Del { id, yes } => del(cfg, *id, *yes),
    }
}

/// Snap free-text method input onto the fixed option set when it matches
/// one of the options case-insensitively; otherwise keep it as typed.
fn canonical_method(m: &str) -> String {
    METHOD_OPTIONS
        .iter()
        .find(|opt| opt.eq_ignore_ascii_case(m.trim()))
        .map(|opt| opt.to_string())
        .unwrap_or_else(|| m.to_string())
}

#[allow(clippy::too_many_arguments)]
fn add(
    cfg: &Config,
    name: &str,
    grind_size: &str,
    method: &Option<String>,
    minutes: u32,
    seconds: u32,
    stopwatch: bool,
    notes: &str,
    rating: u8,
    photo: &Option<String>,
) -> AppResult<()> {
    if rating > 5 {
        return Err(AppError::InvalidRating(rating as i64));
    }

    let timing = if stopwatch {
        let (elapsed_seconds, markers) = TimingSession::new(cfg.timeline_width).run()?;
        println!();
        if !markers.is_empty() {
            info(format!(
                "Recorded {} marker(s) over {}.",
                markers.len(),
                format_seconds(elapsed_seconds)
            ));
        }
        TimingSource::Stopwatch {
            elapsed_seconds,
            markers,
        }
    } else {
        if seconds >= 60 {
            return Err(AppError::InvalidTiming(format!("{}:{}", minutes, seconds)));
        }
        TimingSource::Manual { minutes, seconds }
    };

    let draft = BrewDraft {
        name: name.to_string(),
        grind_size: grind_size.to_string(),
        method: method
            .as_deref()
            .map(canonical_method)
            .unwrap_or_else(|| cfg.default_method.clone()),
        notes: notes.to_string(),
        rating,
        photo: photo.as_deref().and_then(load_photo),
    };

    let brew = draft.commit(timing)?;

    let mut store = Store::open(&cfg.database)?;
    let id = store.insert_brew(&brew)?;
    success(format!("Added brew #{} '{}' ({})", id, brew.name, brew.timing));

    // The insert invalidated the brew list; re-read it through the store.
    for change in store.take_changes() {
        if change == Change::Brews {
            info(format!("{} brew(s) in the journal.", store.brews()?.len()));
        }
    }
    Ok(())
}

fn list(cfg: &Config) -> AppResult<()> {
    let store = Store::open(&cfg.database)?;
    let brews = store.brews()?;

    if brews.is_empty() {
        info("No brews yet. Add one with: driplet brew add --name <NAME>");
        return Ok(());
    }

    let name_w = fit_width(brews.iter().map(|b| b.name.as_str()), 4);
    let method_w = fit_width(brews.iter().map(|b| b.method.as_str()), 6);

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 4,
        },
        Column {
            header: "DATE".to_string(),
            width: 16,
        },
        Column {
            header: "NAME".to_string(),
            width: name_w,
        },
        Column {
            header: "METHOD".to_string(),
            width: method_w,
        },
        Column {
            header: "TIME".to_string(),
            width: 6,
        },
        Column {
            header: "RATING".to_string(),
            width: 6,
        },
    ]);

    for brew in &brews {
        table.add_row(vec![
            brew.id.to_string(),
            brew.timestamp_str(),
            brew.name.clone(),
            brew.method.clone(),
            brew.timing.clone(),
            brew.rating.map(rating_stars).unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

fn show(cfg: &Config, id: i64) -> AppResult<()> {
    let store = Store::open(&cfg.database)?;
    let brew = store.get_brew(id)?;

    println!("{}", bold(&format!("Brew #{}", brew.id)));
    labeled("Name", &brew.name);
    labeled("Method", &brew.method);
    labeled("Grind", &brew.grind_size);
    labeled("Time", &brew.timing);
    if let Some(r) = brew.rating {
        labeled("Rating", &rating_stars(r));
    }
    labeled("Date", &brew.timestamp_str());
    labeled("Photo", &describe_photo(brew.photo.as_deref()));
    if !brew.notes.is_empty() {
        println!("\n  Notes:\n  {}", brew.notes);
    }

    if !brew.markers.is_empty() {
        let total = parse_timing(&brew.timing).ok();
        let elapsed = total.unwrap_or_else(|| {
            brew.markers.iter().map(|m| m.seconds).max().unwrap_or(0)
        });

        println!("\n  Markers:");
        for m in &brew.markers {
            println!("  {}  {}", format_seconds(m.seconds), m.label);
        }
        println!(
            "\n  {}",
            render_bar(elapsed, &brew.markers, total, cfg.timeline_width)
        );
    }

    Ok(())
}

fn del(cfg: &Config, id: i64, yes: bool) -> AppResult<()> {
    let mut store = Store::open(&cfg.database)?;
    let brew = store.get_brew(id)?;

    let prompt = format!(
        "Delete brew #{} '{}'? This action is irreversible.",
        id, brew.name
    );
    if !yes && !ask_confirmation(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    store.delete_brew(id)?;
    success(format!("Brew #{} has been deleted.", id));
    Ok(())
}
