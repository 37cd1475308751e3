pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::storage::JsonFileStorage;
pub use crate::config::AppConfig;
pub use crate::core::commands::dispatch;
pub use crate::domain::model::{Datastore, PersonRecord};
pub use crate::domain::ports::{Command, ConfigProvider, Storage};
pub use crate::utils::error::{OnexoneError, Result};
