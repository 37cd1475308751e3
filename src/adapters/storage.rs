use crate::domain::model::Datastore;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{OnexoneError, Result};
#[cfg(test)]
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// JSON document on local disk, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Makes sure the parent directory of `default_path` exists and returns
    /// storage rooted there. An already existing directory is fine.
    pub fn choose_location(default_path: impl Into<PathBuf>) -> Result<Self> {
        let path = default_path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| OnexoneError::StorageUnavailable {
                path: parent.display().to_string(),
                source,
            })?;
        }

        if path.is_dir() {
            return Err(OnexoneError::StorageUnavailable {
                path: path.display().to_string(),
                source: std::io::Error::new(ErrorKind::Other, "data file path is a directory"),
            });
        }

        tracing::debug!("📁 Using datastore at {}", path.display());
        Ok(Self { path })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::choose_location(config.data_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Datastore> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No datastore at {}, starting empty", self.path.display());
                return Ok(Datastore::new());
            }
            Err(e) => return Err(e.into()),
        };

        let datastore: Datastore = serde_json::from_slice(&data)?;
        tracing::debug!(
            "Loaded {} people from {}",
            datastore.len(),
            self.path.display()
        );
        Ok(datastore)
    }

    fn save(&self, datastore: &Datastore) -> Result<()> {
        let mut data = serde_json::to_vec_pretty(datastore)?;
        data.push(b'\n');

        fs::write(&self.path, data).map_err(|source| OnexoneError::StorageUnavailable {
            path: self.path.display().to_string(),
            source,
        })?;
        tracing::debug!(
            "Saved {} people to {}",
            datastore.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-process storage for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    datastore: RefCell<Datastore>,
    saves: RefCell<usize>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new(datastore: Datastore) -> Self {
        Self {
            datastore: RefCell::new(datastore),
            saves: RefCell::new(0),
        }
    }

    pub fn snapshot(&self) -> Datastore {
        self.datastore.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn load(&self) -> Result<Datastore> {
        Ok(self.datastore.borrow().clone())
    }

    fn save(&self, datastore: &Datastore) -> Result<()> {
        *self.datastore.borrow_mut() = datastore.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_date;
    use tempfile::TempDir;

    fn sample() -> Datastore {
        let mut ds = Datastore::new();
        ds.add_person("Bob Brown").unwrap();
        ds.add_person("Alice Smith").unwrap();
        ds.add_meeting("Alice Smith", validate_date("2020-06-01").unwrap())
            .unwrap();
        ds.add_meeting("Alice Smith", validate_date("2020-01-01").unwrap())
            .unwrap();
        ds.set_enabled("Bob Brown", false).unwrap();
        ds
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("onexone-data.json"));

        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_choose_location_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/config/onexone-data.json");

        let storage = JsonFileStorage::choose_location(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
        assert_eq!(storage.path(), path.as_path());

        // 目錄已存在也可以
        assert!(JsonFileStorage::choose_location(&path).is_ok());
    }

    #[test]
    fn test_choose_location_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            JsonFileStorage::choose_location(temp_dir.path()),
            Err(OnexoneError::StorageUnavailable { .. })
        ));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("onexone-data.json"));
        let ds = sample();

        storage.save(&ds).unwrap();
        let first = fs::read_to_string(storage.path()).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(loaded, ds);

        storage.save(&loaded).unwrap();
        let second = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialized_layout() {
        let json: serde_json::Value = serde_json::to_value(sample()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "Alice Smith": { "enabled": true, "meetings": ["2020-01-01", "2020-06-01"] },
                "Bob Brown": { "enabled": false, "meetings": [] }
            })
        );
    }

    #[test]
    fn test_unsorted_meetings_are_normalized() {
        let raw = r#"{"Alice": {"enabled": true, "meetings": ["2020-06-01", "2020-01-01"]}}"#;
        let ds: Datastore = serde_json::from_str(raw).unwrap();

        let saved = serde_json::to_string(&ds).unwrap();
        assert_eq!(
            saved,
            r#"{"Alice":{"enabled":true,"meetings":["2020-01-01","2020-06-01"]}}"#
        );
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("onexone-data.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonFileStorage::new(path).load(),
            Err(OnexoneError::SerializationError(_))
        ));
    }

    #[test]
    fn test_non_canonical_dates_in_file_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("onexone-data.json");
        let raw = r#"{"Alice":{"enabled":true,"meetings":["2020-1-5","2020-01-05"," 2020-02-03"]}}"#;
        fs::write(&path, raw).unwrap();

        let storage = JsonFileStorage::new(&path);
        match storage.load() {
            Err(OnexoneError::SerializationError(e)) => {
                assert!(e.to_string().contains("Invalid date: 2020-1-5"));
            }
            other => panic!("expected a serialization error, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), raw);
    }

    #[test]
    fn test_duplicate_dates_in_file_are_rejected() {
        let raw = r#"{"Alice":{"enabled":true,"meetings":["2020-01-05","2020-01-05"]}}"#;
        let err = serde_json::from_str::<Datastore>(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate meeting date '2020-01-05'"));

        let raw = r#"{"Alice":{"enabled":true,"meetings":["2020-02-30"]}}"#;
        assert!(serde_json::from_str::<Datastore>(raw).is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let ds: Datastore = serde_json::from_str(r#"{"Alice":{}}"#).unwrap();
        assert!(ds.is_enabled("Alice").unwrap());
        assert!(ds.get_meetings("Alice").unwrap().is_empty());
    }

    #[test]
    fn test_memory_storage_counts_saves() {
        let storage = MemoryStorage::new(sample());
        let mut ds = storage.load().unwrap();
        ds.add_person("Carol").unwrap();
        storage.save(&ds).unwrap();

        assert_eq!(storage.save_count(), 1);
        assert_eq!(storage.snapshot().len(), 3);
    }
}
