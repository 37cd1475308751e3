use crate::domain::model::Datastore;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

pub trait Storage {
    fn load(&self) -> Result<Datastore>;
    fn save(&self, datastore: &Datastore) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &Path;
}

/// A single subcommand. Output is written to `out`; expected failures are
/// returned and rendered by the dispatcher.
pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, storage: &dyn Storage, out: &mut dyn Write) -> Result<()>;
}
