use crate::utils::validation::validate_date;
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One roster entry. Meetings live inside the record, so a meeting can never
/// outlive its person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "deserialize_meetings")]
    pub meetings: BTreeSet<NaiveDate>,
}

/// Stored dates go through the same strict check as user input, and a date
/// may appear only once, so nothing is silently merged on the next save.
fn deserialize_meetings<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeSet<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut meetings = BTreeSet::new();
    for value in raw {
        let date = validate_date(&value).map_err(de::Error::custom)?;
        if !meetings.insert(date) {
            return Err(de::Error::custom(format!(
                "duplicate meeting date '{}'",
                value
            )));
        }
    }
    Ok(meetings)
}

fn default_enabled() -> bool {
    true
}

impl Default for PersonRecord {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            meetings: BTreeSet::new(),
        }
    }
}

/// Roster and ledger, keyed by full name. `BTreeMap`/`BTreeSet` keep the
/// serialized form sorted, so load/save round trips are byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datastore {
    pub people: BTreeMap<String, PersonRecord>,
}

impl Datastore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// A single row of the up-next report. `latest == None` means never met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpNextEntry {
    pub name: String,
    pub latest: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpNextReport {
    pub name_width: usize,
    pub entries: Vec<UpNextEntry>,
}
