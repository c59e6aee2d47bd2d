use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_journal;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `log` command: print the internal operation journal.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do. Use --print to show the journal.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let rows = load_journal(&pool.conn)?;

        if rows.is_empty() {
            info("The journal is empty.");
            return Ok(());
        }

        for (date, operation, target, message) in rows {
            println!("{}  {:<10} {:<6} {}", date, operation, target, message);
        }
    }
    Ok(())
}
