pub mod commands;
pub mod ledger;
pub mod ranking;
pub mod registry;

pub use crate::domain::model::{Datastore, PersonRecord, UpNextEntry, UpNextReport};
pub use crate::domain::ports::{Command, ConfigProvider, Storage};
pub use crate::utils::error::Result;
