use serde::{Deserialize, Serialize};

/// Ordinal roast darkness classification for a coffee bag.
/// Presentation-only: each level carries a display name, an abbreviation
/// and a fixed badge color pair (fill + text) for contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoastLevel {
    Light,
    LightMedium,
    Medium,
    MediumDark,
    Dark,
}

/// Badge fill colors, darkest-roast = darkest brown (ANSI 256 palette).
const BG_LIGHT: &str = "\x1b[48;5;216m";
const BG_LIGHT_MEDIUM: &str = "\x1b[48;5;180m";
const BG_MEDIUM: &str = "\x1b[48;5;137m";
const BG_MEDIUM_DARK: &str = "\x1b[48;5;94m";
const BG_DARK: &str = "\x1b[48;5;52m";

const FG_BLACK: &str = "\x1b[30m";
const FG_WHITE: &str = "\x1b[97m";

impl RoastLevel {
    pub const ALL: [RoastLevel; 5] = [
        RoastLevel::Light,
        RoastLevel::LightMedium,
        RoastLevel::Medium,
        RoastLevel::MediumDark,
        RoastLevel::Dark,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            RoastLevel::Light => "Light",
            RoastLevel::LightMedium => "Light-Med",
            RoastLevel::Medium => "Medium",
            RoastLevel::MediumDark => "Med-Dark",
            RoastLevel::Dark => "Dark",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            RoastLevel::Light => "L",
            RoastLevel::LightMedium => "L-M",
            RoastLevel::Medium => "M",
            RoastLevel::MediumDark => "M-D",
            RoastLevel::Dark => "D",
        }
    }

    /// Badge fill color (ANSI background escape).
    pub fn color(&self) -> &'static str {
        match self {
            RoastLevel::Light => BG_LIGHT,
            RoastLevel::LightMedium => BG_LIGHT_MEDIUM,
            RoastLevel::Medium => BG_MEDIUM,
            RoastLevel::MediumDark => BG_MEDIUM_DARK,
            RoastLevel::Dark => BG_DARK,
        }
    }

    /// Text color paired with the fill for contrast: white on the two
    /// darkest levels, black otherwise.
    pub fn text_color(&self) -> &'static str {
        match self {
            RoastLevel::MediumDark | RoastLevel::Dark => FG_WHITE,
            _ => FG_BLACK,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RoastLevel::Light => "light",
            RoastLevel::LightMedium => "light-medium",
            RoastLevel::Medium => "medium",
            RoastLevel::MediumDark => "medium-dark",
            RoastLevel::Dark => "dark",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(RoastLevel::Light),
            "light-medium" => Some(RoastLevel::LightMedium),
            "medium" => Some(RoastLevel::Medium),
            "medium-dark" => Some(RoastLevel::MediumDark),
            "dark" => Some(RoastLevel::Dark),
            _ => None,
        }
    }

    /// Helper: parse CLI input, accepting db codes, display names and
    /// the short abbreviations, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_lowercase();
        match c.as_str() {
            "l" => Some(RoastLevel::Light),
            "l-m" | "lm" | "light-med" => Some(RoastLevel::LightMedium),
            "m" => Some(RoastLevel::Medium),
            "m-d" | "md" | "med-dark" => Some(RoastLevel::MediumDark),
            "d" => Some(RoastLevel::Dark),
            _ => RoastLevel::from_db_str(&c),
        }
    }
}
