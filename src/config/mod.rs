use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_method")]
    pub default_method: String,
    #[serde(default = "default_roast_level")]
    pub default_roast_level: String,
    #[serde(default = "default_timeline_width")]
    pub timeline_width: usize,
}

fn default_method() -> String {
    "Pour Over".to_string()
}
fn default_roast_level() -> String {
    "medium".to_string()
}
fn default_timeline_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_method: default_method(),
            default_roast_level: default_roast_level(),
            timeline_width: default_timeline_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("driplet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".driplet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("driplet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("driplet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Write the configuration file.
    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Initialize configuration directory, file and database path.
    /// In test mode (`--test`) the config file is left untouched.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }

    /// Report config-file keys that are missing and would fall back to
    /// their defaults. Returns the missing key names.
    pub fn check_missing_keys() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::ConfigLoad);
        }

        let content = fs::read_to_string(&path)?;
        let raw: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

        let mut missing = Vec::new();
        for key in [
            "database",
            "default_method",
            "default_roast_level",
            "timeline_width",
        ] {
            if raw.get(key).is_none() {
                missing.push(key);
            }
        }
        Ok(missing)
    }
}
