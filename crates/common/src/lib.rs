//! Common utilities and shared types for postboard.
//!
//! This crate provides foundational components used across all postboard crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//!
//! # Example
//!
//! ```no_run
//! use postboard_common::{AppResult, Config};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     println!("Database: {}", config.database.url);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;

pub use config::{Config, DatabaseConfig, LoggingConfig};
pub use error::{AppError, AppResult};
