//! # Tasktracker Core Library
//!
//! Persistence and domain types for a single-user task tracker backed by a
//! local SQLite file.
//!
//! ## Core Modules
//!
//! - [`db`]: Store configuration, connection and schema application
//! - [`models`]: The `Task` entity, its status enumeration and mutation outcomes
//! - [`repository`]: Data access layer with Repository pattern
//! - [`error`]: Storage error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tasktracker_core::{
//!     db::{self, StoreConfig},
//!     models::{Outcome, TaskStatus},
//!     repository::{SqliteRepository, TaskRepository},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tasktracker_core::error::CoreError> {
//!     let pool = db::establish_connection(&StoreConfig::new("tasks.db")).await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     let task = repo.add_task("write spec").await?;
//!     if let Outcome::NotFound(id) = repo.set_status(task.id, TaskStatus::Done).await? {
//!         println!("task {id} vanished");
//!     }
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod models;
pub mod repository;
