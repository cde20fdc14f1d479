use crate::error::CoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// Re-export the pool for use in other parts of the core crate
pub use sqlx::SqlitePool as DbPool;

/// Contents written to the default schema script the first time a store is created.
pub const DEFAULT_SCHEMA: &str = include_str!("../schema.sql");

/// Database location that keeps everything in memory for the lifetime of the handle.
pub const IN_MEMORY: &str = ":memory:";

/// File name of the schema script kept beside the database file.
pub const SCHEMA_FILE: &str = "schema.sql";

/// Where the store lives and which schema script initializes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_path: PathBuf,
    /// Schema script, re-read on every open. `None` means [`SCHEMA_FILE`]
    /// beside the database file.
    pub schema_path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            schema_path: None,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    pub fn with_schema_path(mut self, schema_path: impl Into<PathBuf>) -> Self {
        self.schema_path = Some(schema_path.into());
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY)
    }

    /// The script read at open. An in-memory store without an explicit
    /// script has none and uses [`DEFAULT_SCHEMA`] directly.
    pub fn schema_script_path(&self) -> Option<PathBuf> {
        match &self.schema_path {
            Some(path) => Some(path.clone()),
            None if self.is_in_memory() => None,
            None => Some(
                self.database_path
                    .parent()
                    .unwrap_or_else(|| Path::new(""))
                    .join(SCHEMA_FILE),
            ),
        }
    }
}

/// Opens a handle to the SQLite database and applies the schema script.
///
/// The handle is a pool capped at one connection, so an in-memory database
/// survives for as long as the handle does.
///
/// # Returns
///
/// A `Result` containing the `SqlitePool` or a `CoreError` if the file cannot
/// be created or opened, or the schema script cannot be read or executed.
pub async fn establish_connection(config: &StoreConfig) -> Result<SqlitePool, CoreError> {
    if config.database_path.as_os_str().is_empty() {
        return Err(CoreError::InvalidInput(
            "database path must not be empty".to_string(),
        ));
    }

    let options = if config.is_in_memory() {
        SqliteConnectOptions::from_str("sqlite::memory:")?
    } else {
        // Create the directory holding the database file if it doesn't exist
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true)
    };

    tracing::debug!(path = %config.database_path.display(), "opening task store");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    let schema = load_schema(config).await?;
    apply_schema(&pool, &schema).await?;

    Ok(pool)
}

/// Reads the schema script. The default script beside the database is
/// written from [`DEFAULT_SCHEMA`] when missing; an explicitly configured
/// script must already exist.
async fn load_schema(config: &StoreConfig) -> Result<String, CoreError> {
    let Some(path) = config.schema_script_path() else {
        return Ok(DEFAULT_SCHEMA.to_string());
    };

    if config.schema_path.is_none() && !tokio::fs::try_exists(&path).await? {
        tracing::debug!(path = %path.display(), "writing default schema script");
        tokio::fs::write(&path, DEFAULT_SCHEMA).await?;
    }

    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| CoreError::SchemaRead { path, source })
}

/// Runs the schema script. The script uses `CREATE TABLE IF NOT EXISTS`, so
/// applying it to an initialized database leaves existing rows untouched.
pub async fn apply_schema(pool: &SqlitePool, schema: &str) -> Result<(), CoreError> {
    tracing::debug!(bytes = schema.len(), "applying schema script");
    pool.execute(schema).await?;
    Ok(())
}
