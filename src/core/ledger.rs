//! Meeting ledger: the per-person set of meeting dates.

use crate::domain::model::Datastore;
use crate::utils::error::{OnexoneError, Result};
use crate::utils::validation::DATE_FORMAT;
use chrono::NaiveDate;
use std::collections::BTreeSet;

impl Datastore {
    pub fn add_meeting(&mut self, person: &str, date: NaiveDate) -> Result<()> {
        let record = self.person_mut(person)?;
        if !record.meetings.insert(date) {
            return Err(OnexoneError::MeetingAlreadyExists {
                person: person.to_string(),
                date: date.format(DATE_FORMAT).to_string(),
            });
        }
        tracing::debug!("Added meeting {} for '{}'", date, person);
        Ok(())
    }

    pub fn delete_meeting(&mut self, person: &str, date: NaiveDate) -> Result<()> {
        let record = self.person_mut(person)?;
        if !record.meetings.remove(&date) {
            return Err(OnexoneError::MeetingNotFound {
                person: person.to_string(),
                date: date.format(DATE_FORMAT).to_string(),
            });
        }
        tracing::debug!("Deleted meeting {} for '{}'", date, person);
        Ok(())
    }

    pub fn get_meetings(&self, person: &str) -> Result<&BTreeSet<NaiveDate>> {
        self.person(person).map(|record| &record.meetings)
    }

    pub fn meeting_exists(&self, person: &str, date: NaiveDate) -> Result<bool> {
        Ok(self.get_meetings(person)?.contains(&date))
    }

    pub fn latest_meeting(&self, person: &str) -> Result<Option<NaiveDate>> {
        Ok(self.get_meetings(person)?.last().copied())
    }
}
