//! Ranking engine for the up-next report.

use crate::domain::model::{Datastore, UpNextEntry, UpNextReport};
use crate::utils::error::Result;
use crate::utils::validation::DATE_FORMAT;
use std::fmt;

pub const NEVER_LABEL: &str = "never";

/// Orders everybody by their most recent meeting (never met first, ties by
/// name) and keeps only enabled people. The name column is sized over the
/// whole roster, before disabled people are dropped.
pub fn up_next(datastore: &Datastore) -> Result<UpNextReport> {
    let mut candidates = datastore
        .list_full_names()
        .into_iter()
        .map(|name| {
            let latest = datastore.latest_meeting(&name)?;
            Ok(UpNextEntry { name, latest })
        })
        .collect::<Result<Vec<_>>>()?;

    // Option<NaiveDate> 的排序中 None 在所有日期之前
    candidates.sort_by(|a, b| a.latest.cmp(&b.latest).then_with(|| a.name.cmp(&b.name)));

    let name_width = candidates
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut entries = Vec::with_capacity(candidates.len());
    for entry in candidates {
        if datastore.is_enabled(&entry.name)? {
            entries.push(entry);
        }
    }

    tracing::debug!(
        "Up-next report: {} of {} people enabled",
        entries.len(),
        datastore.len()
    );

    Ok(UpNextReport {
        name_width,
        entries,
    })
}

impl fmt::Display for UpNextReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.name_width;
        writeln!(f, "{:>width$}  {:>8}", "Name", "Last OneOnOne")?;
        writeln!(f, "{:>width$}  {:>8}", "----", "-------------")?;
        for entry in &self.entries {
            let last = match entry.latest {
                Some(date) => date.format(DATE_FORMAT).to_string(),
                None => NEVER_LABEL.to_string(),
            };
            writeln!(f, "{:>width$}  {:>8}", entry.name, last)?;
        }
        Ok(())
    }
}
