use clap::{Parser, Subcommand};

/// Command-line interface definition for driplet
/// CLI application to track coffee bags and brews with SQLite
#[derive(Parser)]
#[command(
    name = "driplet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A CLI coffee journal: track coffee bags and brew sessions, time brews with a stopwatch, using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage coffee bags
    Bag {
        #[command(subcommand)]
        action: BagCommands,
    },

    /// Manage brew sessions
    Brew {
        #[command(subcommand)]
        action: BrewCommands,
    },
}

#[derive(Subcommand)]
pub enum BagCommands {
    /// Add a new coffee bag
    Add {
        /// Coffee name (required non-empty)
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        roaster: String,

        #[arg(long, default_value = "")]
        origin: String,

        /// Roast date (YYYY-MM-DD)
        #[arg(long = "roast-date")]
        roast_date: Option<String>,

        /// Roast level: light, light-medium, medium, medium-dark, dark
        /// (abbreviations L, L-M, M, M-D, D also accepted)
        #[arg(long = "roast")]
        roast: Option<String>,

        #[arg(long, default_value = "")]
        notes: String,

        /// Photo file to attach (non-image files are ignored)
        #[arg(long, value_name = "FILE")]
        photo: Option<String>,
    },

    /// List coffee bags, sorted by name
    List {
        /// Only show bags with this roast level
        #[arg(long = "roast")]
        roast: Option<String>,
    },

    /// Edit an existing coffee bag (unspecified fields keep their value)
    Edit {
        /// Bag id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        roaster: Option<String>,

        #[arg(long)]
        origin: Option<String>,

        #[arg(long = "roast-date")]
        roast_date: Option<String>,

        #[arg(long = "clear-roast-date", conflicts_with = "roast_date")]
        clear_roast_date: bool,

        #[arg(long = "roast")]
        roast: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, value_name = "FILE")]
        photo: Option<String>,

        #[arg(long = "remove-photo", conflicts_with = "photo")]
        remove_photo: bool,
    },

    /// Delete a coffee bag by id
    Del {
        /// Bag id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum BrewCommands {
    /// Add a new brew session
    Add {
        /// Brew name (required non-empty)
        #[arg(long)]
        name: String,

        #[arg(long = "grind", default_value = "")]
        grind_size: String,

        /// Brew method (Pour Over, French Press, Espresso, Aeropress,
        /// Cold Brew, Drip, Moka Pot, Siphon, or free text)
        #[arg(long)]
        method: Option<String>,

        /// Timing minutes (manual entry)
        #[arg(long, default_value_t = 0, conflicts_with = "stopwatch")]
        minutes: u32,

        /// Timing seconds (manual entry, 0-59)
        #[arg(long, default_value_t = 0, conflicts_with = "stopwatch")]
        seconds: u32,

        /// Time the brew interactively with the stopwatch
        #[arg(long)]
        stopwatch: bool,

        #[arg(long, default_value = "")]
        notes: String,

        /// Rating 1-5 (0 = unrated)
        #[arg(long, default_value_t = 0)]
        rating: u8,

        /// Photo file to attach (non-image files are ignored)
        #[arg(long, value_name = "FILE")]
        photo: Option<String>,
    },

    /// List brews, newest first
    List,

    /// Show a brew in detail, including its marker timeline
    Show {
        /// Brew id
        id: i64,
    },

    /// Delete a brew by id
    Del {
        /// Brew id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
