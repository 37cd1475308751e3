//! Concrete subcommands under the `meeting` and `person` namespaces, plus the
//! dispatcher that runs them.

use crate::core::ranking;
use crate::domain::model::Datastore;
use crate::domain::ports::{Command, Storage};
use crate::utils::error::{OnexoneError, Result};
use crate::utils::validation::{validate_date, DATE_FORMAT};
use std::io::Write;

/// Runs a command inside a `command` span. Expected failures are written to
/// `out` as a single line instead of being returned; only a failure to write
/// that line escapes.
pub fn dispatch(command: &dyn Command, storage: &dyn Storage, out: &mut dyn Write) -> Result<()> {
    let span = tracing::info_span!("command", name = command.name());
    let _enter = span.enter();

    tracing::debug!("Executing");
    match command.execute(storage, out) {
        Ok(()) => {
            tracing::debug!("Done");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::debug!("💡 {}", e.recovery_suggestion());
            writeln!(out, "{}", e.user_friendly_message())?;
            Ok(())
        }
    }
}

/// Load, mutate, and write back only when the mutation succeeded.
fn mutate<T>(
    storage: &dyn Storage,
    change: impl FnOnce(&mut Datastore) -> Result<T>,
) -> Result<T> {
    let mut datastore = storage.load()?;
    let value = change(&mut datastore)?;
    storage.save(&datastore)?;
    Ok(value)
}

#[derive(Debug, Clone)]
pub struct AddMeeting {
    pub person: String,
    pub date: String,
}

impl Command for AddMeeting {
    fn name(&self) -> &'static str {
        "meeting add"
    }

    fn execute(&self, storage: &dyn Storage, out: &mut dyn Write) -> Result<()> {
        let (person, date) = mutate(storage, |ds| {
            let person = ds.resolve(&self.person)?;
            let date = validate_date(&self.date)?;
            ds.add_meeting(&person, date)?;
            Ok((person, date))
        })?;
        writeln!(
            out,
            "Added meeting '{}' for '{}'",
            date.format(DATE_FORMAT),
            person
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DeleteMeeting {
    pub person: String,
    pub date: String,
}

impl Command for DeleteMeeting {
    fn name(&self) -> &'static str {
        "meeting delete"
    }

    fn execute(&self, storage: &dyn Storage, out: &mut dyn Write) -> Result<()> {
        let (person, date) = mutate(storage, |ds| {
            let person = ds.resolve(&self.person)?;
            let date = validate_date(&self.date)?;
            ds.delete_meeting(&person, date)?;
            Ok((person, date))
        })?;
        writeln!(
            out,
            "Deleted meeting '{}' for '{}'",
            date.format(DATE_FORMAT),
            person
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpNext;

impl Command for UpNext {
    fn name(&self) -> &'static str {
        "meeting up-next"
    }

    fn execute(&self, storage: &dyn Storage, out: &mut dyn Write) -> Result<()> {
        let datastore = storage.load()?;
        let report = ranking::up_next(&datastore)?;
        write!(out, "{}", report)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AddPerson {
    pub name: String,
}

impl Command for AddPerson {
    fn name(&self) -> &'static str {
        "person add"
    }

    fn execute(&self, storage: &dyn Storage, out: &mut dyn Write) -> Result<()> {
        let name = mutate(storage, |ds| ds.add_person(&self.name))?;
        writeln!(out, "Added '{}'", name)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DeletePerson {
    pub person: String,
}

impl Command for DeletePerson {
    fn name(&self) -> &'static str {
        "person delete"
    }

    fn execute(&self, storage: &dyn Storage, out: &mut dyn Write) -> Result<()> {
        let (name, record) = mutate(storage, |ds| {
            let name = ds.resolve(&self.person)?;
            let record = ds.delete_person(&name)?;
            Ok((name, record))
        })?;
        writeln!(
            out,
            "Deleted '{}' and {} meeting(s)",
            name,
            record.meetings.len()
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListPeople;

impl Command for ListPeople {
    fn name(&self) -> &'static str {
        "person list"
    }

    fn execute(&self, storage: &dyn Storage, out: &mut dyn Write) -> Result<()> {
        let datastore = storage.load()?;
        if datastore.is_empty() {
            writeln!(out, "No people found")?;
            return Ok(());
        }
        for name in datastore.list_full_names() {
            if datastore.is_enabled(&name)? {
                writeln!(out, "{}", name)?;
            } else {
                writeln!(out, "{} (disabled)", name)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FindPerson {
    pub fragment: String,
}

impl Command for FindPerson {
    fn name(&self) -> &'static str {
        "person find"
    }

    fn execute(&self, storage: &dyn Storage, out: &mut dyn Write) -> Result<()> {
        let matches = storage.load()?.find(&self.fragment);
        if matches.is_empty() {
            return Err(OnexoneError::PersonNotFound {
                fragment: self.fragment.clone(),
            });
        }
        for name in matches {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SetEnabled {
    pub person: String,
    pub enabled: bool,
}

impl Command for SetEnabled {
    fn name(&self) -> &'static str {
        if self.enabled {
            "person enable"
        } else {
            "person disable"
        }
    }

    fn execute(&self, storage: &dyn Storage, out: &mut dyn Write) -> Result<()> {
        let name = mutate(storage, |ds| {
            let name = ds.resolve(&self.person)?;
            ds.set_enabled(&name, self.enabled)?;
            Ok(name)
        })?;
        let state = if self.enabled { "Enabled" } else { "Disabled" };
        writeln!(out, "{} '{}'", state, name)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ShowPerson {
    pub person: String,
}

impl Command for ShowPerson {
    fn name(&self) -> &'static str {
        "person show"
    }

    fn execute(&self, storage: &dyn Storage, out: &mut dyn Write) -> Result<()> {
        let datastore = storage.load()?;
        let name = datastore.resolve(&self.person)?;
        let state = if datastore.is_enabled(&name)? {
            "enabled"
        } else {
            "disabled"
        };
        writeln!(out, "{} ({})", name, state)?;

        let meetings = datastore.get_meetings(&name)?;
        if meetings.is_empty() {
            writeln!(out, "  no meetings")?;
        }
        for date in meetings.iter().rev() {
            writeln!(out, "  {}", date.format(DATE_FORMAT))?;
        }
        Ok(())
    }
}
