use crate::config::Config;
use crate::db::log::journal;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::migrate::init_db;
use crate::ui::messages::success;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing driplet…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;
    journal(&conn, "init", &db_path, "database initialized")?;

    success("driplet is ready. Add a bag with: driplet bag add --name <NAME>");
    Ok(())
}
