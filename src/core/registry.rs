//! Person registry: roster lookups and lifecycle on top of [`Datastore`].

use crate::domain::model::{Datastore, PersonRecord};
use crate::utils::error::{OnexoneError, Result};
use crate::utils::validation::validate_person_name;

impl Datastore {
    /// Case-insensitive substring match against every full name.
    pub fn find(&self, fragment: &str) -> Vec<String> {
        let needle = fragment.to_lowercase();
        self.people
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Resolves a fragment to exactly one full name.
    pub fn resolve(&self, fragment: &str) -> Result<String> {
        let mut matches = self.find(fragment);
        match matches.len() {
            0 => Err(OnexoneError::PersonNotFound {
                fragment: fragment.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(OnexoneError::PersonAmbiguous {
                fragment: fragment.to_string(),
                matches,
            }),
        }
    }

    pub fn is_enabled(&self, name: &str) -> Result<bool> {
        self.person(name).map(|record| record.enabled)
    }

    /// Sorted by name, so the order is stable across calls.
    pub fn list_full_names(&self) -> Vec<String> {
        self.people.keys().cloned().collect()
    }

    pub fn add_person(&mut self, name: &str) -> Result<String> {
        let name = validate_person_name(name)?;
        if self.people.contains_key(&name) {
            return Err(OnexoneError::PersonAlreadyExists { name });
        }
        self.people.insert(name.clone(), PersonRecord::default());
        tracing::debug!("Added person '{}'", name);
        Ok(name)
    }

    /// Removes the person together with their meetings.
    pub fn delete_person(&mut self, name: &str) -> Result<PersonRecord> {
        let record = self
            .people
            .remove(name)
            .ok_or_else(|| OnexoneError::PersonNotFound {
                fragment: name.to_string(),
            })?;
        tracing::debug!(
            "Deleted person '{}' with {} meetings",
            name,
            record.meetings.len()
        );
        Ok(record)
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<()> {
        self.person_mut(name)?.enabled = enabled;
        tracing::debug!("Set '{}' enabled={}", name, enabled);
        Ok(())
    }

    pub(crate) fn person(&self, name: &str) -> Result<&PersonRecord> {
        self.people
            .get(name)
            .ok_or_else(|| OnexoneError::PersonNotFound {
                fragment: name.to_string(),
            })
    }

    pub(crate) fn person_mut(&mut self, name: &str) -> Result<&mut PersonRecord> {
        self.people
            .get_mut(name)
            .ok_or_else(|| OnexoneError::PersonNotFound {
                fragment: name.to_string(),
            })
    }
}
