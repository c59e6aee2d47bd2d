use crate::cli::parser::{BagCommands, Commands};
use crate::config::Config;
use crate::core::draft::BagDraft;
use crate::db::store::{Change, Store};
use crate::errors::{AppError, AppResult};
use crate::models::bag::CoffeeBag;
use crate::models::roast_level::RoastLevel;
use crate::ui::messages::{ask_confirmation, info, success};
use crate::utils::colors::{RESET, dash_if_empty};
use crate::utils::date;
use crate::utils::photo::load_photo;
use crate::utils::table::{Column, Table, fit_width};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Bag { action } = cmd else {
        return Ok(());
    };

    match action {
        BagCommands::Add {
            name,
            roaster,
            origin,
            roast_date,
            roast,
            notes,
            photo,
        } => add(cfg, name, roaster, origin, roast_date, roast, notes, photo),
        BagCommands::List { roast } => list(cfg, roast),
        BagCommands::Edit {
            id,
            name,
            roaster,
            origin,
            roast_date,
            clear_roast_date,
            roast,
            notes,
            photo,
            remove_photo,
        } => edit(
            cfg,
            *id,
            name,
            roaster,
            origin,
            roast_date,
            *clear_roast_date,
            roast,
            notes,
            photo,
            *remove_photo,
        ),
        BagCommands::Del { id, yes } => del(cfg, *id, *yes),
    }
}

/// Colored roast badge: abbreviation over the level's fill/text color pair.
fn roast_badge(level: RoastLevel) -> String {
    format!(
        "{}{} {} {}",
        level.color(),
        level.text_color(),
        level.short_name(),
        RESET
    )
}

fn parse_roast(code: &str) -> AppResult<RoastLevel> {
    RoastLevel::from_code(code).ok_or_else(|| AppError::InvalidRoastLevel(code.to_string()))
}

#[allow(clippy::too_many_arguments)]
fn add(
    cfg: &Config,
    name: &str,
    roaster: &str,
    origin: &str,
    roast_date: &Option<String>,
    roast: &Option<String>,
    notes: &str,
    photo: &Option<String>,
) -> AppResult<()> {
    let roast_date = match roast_date {
        Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
        None => None,
    };

    let roast_level = match roast {
        Some(code) => Some(parse_roast(code)?),
        None => None,
    };

    let draft = BagDraft {
        name: name.to_string(),
        roaster: roaster.to_string(),
        origin: origin.to_string(),
        roast_date,
        roast_level,
        notes: notes.to_string(),
        photo: photo.as_deref().and_then(load_photo),
    };

    let default_roast =
        RoastLevel::from_db_str(&cfg.default_roast_level).unwrap_or(RoastLevel::Medium);
    let bag = draft.commit(default_roast)?;

    let mut store = Store::open(&cfg.database)?;
    let id = store.insert_bag(&bag)?;
    success(format!("Added bag #{} '{}'", id, bag.name));

    // The insert invalidated the bag list; re-read it through the store.
    for change in store.take_changes() {
        if change == Change::Bags {
            info(format!("Now tracking {} bag(s).", store.bags()?.len()));
        }
    }
    Ok(())
}

fn list(cfg: &Config, roast: &Option<String>) -> AppResult<()> {
    let store = Store::open(&cfg.database)?;
    let bags = store.bags()?;

    if bags.is_empty() {
        info("No bags yet. Add a coffee bag with: driplet bag add --name <NAME>");
        return Ok(());
    }

    let filter = match roast {
        Some(code) => Some(parse_roast(code)?),
        None => None,
    };

    let filtered: Vec<&CoffeeBag> = bags
        .iter()
        .filter(|b| filter.is_none_or(|f| b.roast_level == f))
        .collect();

    if let Some(level) = filter {
        info(format!("Roast filter: {}", level.display_name()));
    }
    if filtered.is_empty() {
        info("No bags match this roast level.");
        return Ok(());
    }

    let name_w = fit_width(filtered.iter().map(|b| b.name.as_str()), 4);
    let roaster_w = fit_width(filtered.iter().map(|b| b.roaster.as_str()), 7);

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 4,
        },
        Column {
            header: "NAME".to_string(),
            width: name_w,
        },
        Column {
            header: "ROASTER".to_string(),
            width: roaster_w,
        },
        Column {
            header: "ORIGIN".to_string(),
            width: 14,
        },
        Column {
            header: "ROAST DATE".to_string(),
            width: 10,
        },
    ]);

    for bag in &filtered {
        table.add_row(vec![
            bag.id.to_string(),
            bag.name.clone(),
            bag.roaster.clone(),
            bag.origin.clone(),
            bag.roast_date_str().unwrap_or_else(|| "—".to_string()),
        ]);
    }

    // Badge column is appended outside the table: ANSI escapes would skew
    // the width accounting.
    let rendered = table.render();
    let mut lines = rendered.lines();
    if let Some(header) = lines.next() {
        println!("{} ROAST", header);
    }
    for (line, bag) in lines.zip(filtered.iter()) {
        println!("{} {}", line, roast_badge(bag.roast_level));
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn edit(
    cfg: &Config,
    id: i64,
    name: &Option<String>,
    roaster: &Option<String>,
    origin: &Option<String>,
    roast_date: &Option<String>,
    clear_roast_date: bool,
    roast: &Option<String>,
    notes: &Option<String>,
    photo: &Option<String>,
    remove_photo: bool,
) -> AppResult<()> {
    let mut store = Store::open(&cfg.database)?;

    // Draft starts from the stored record; only supplied flags overwrite.
    let mut bag = store.get_bag(id)?;

    if let Some(n) = name {
        if n.trim().is_empty() {
            return Err(AppError::EmptyName);
        }
        bag.name = n.clone();
    }
    if let Some(r) = roaster {
        bag.roaster = r.clone();
    }
    if let Some(o) = origin {
        bag.origin = o.clone();
    }
    if let Some(s) = roast_date {
        bag.roast_date =
            Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?);
    }
    if clear_roast_date {
        bag.roast_date = None;
    }
    if let Some(code) = roast {
        bag.roast_level = parse_roast(code)?;
    }
    if let Some(n) = notes {
        bag.notes = n.clone();
    }
    if let Some(p) = photo {
        bag.photo = load_photo(p);
    }
    if remove_photo {
        bag.photo = None;
    }

    store.update_bag(&bag)?;
    success(format!("Updated bag #{} '{}'", bag.id, bag.name));
    Ok(())
}

fn del(cfg: &Config, id: i64, yes: bool) -> AppResult<()> {
    let mut store = Store::open(&cfg.database)?;
    let bag = store.get_bag(id)?;

    let prompt = format!(
        "Delete bag #{} '{}'? This action is irreversible.",
        id, bag.name
    );
    if !yes && !ask_confirmation(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    store.delete_bag(id)?;
    success(format!("Bag #{} has been deleted.", id));
    Ok(())
}

/// Detail line helper shared with the brew views.
pub fn labeled(title: &str, value: &str) {
    println!("  {:<10} {}", title, dash_if_empty(value));
}
