use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;
use tasktracker_core::db::StoreConfig;

pub const CONFIG_FILE: &str = "tasktracker.toml";
pub const ENV_PREFIX: &str = "TASKTRACKER_";
pub const DEFAULT_DATABASE_PATH: &str = "tasktracker.db";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Location of the SQLite file. `:memory:` keeps the store in memory.
    pub database_path: PathBuf,
    /// Schema script read on every open. Falls back to the bundled schema.
    pub schema_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            schema_path: None,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_figment(Self::figment())
    }

    /// `tasktracker.toml` in the working directory, then `TASKTRACKER_*` variables.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    pub fn with_database_override(mut self, database: Option<PathBuf>) -> Self {
        if let Some(path) = database {
            self.database_path = path;
        }
        self
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            database_path: self.database_path.clone(),
            schema_path: self.schema_path.clone(),
        }
    }
}
