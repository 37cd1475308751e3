use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnexoneError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Person not found: {fragment}")]
    PersonNotFound { fragment: String },

    #[error("Person name is ambiguous: {fragment} matches {matches:?}")]
    PersonAmbiguous {
        fragment: String,
        matches: Vec<String>,
    },

    #[error("Person already exists: {name}")]
    PersonAlreadyExists { name: String },

    #[error("Invalid person name: {name:?}")]
    InvalidPersonName { name: String },

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("Meeting {date} already exists for {person}")]
    MeetingAlreadyExists { person: String, date: String },

    #[error("Meeting {date} not found for {person}")]
    MeetingNotFound { person: String, date: String },

    #[error("Storage unavailable at {path}: {source}")]
    StorageUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Roster,
    Ledger,
    Input,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OnexoneError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OnexoneError::PersonNotFound { .. }
            | OnexoneError::PersonAmbiguous { .. }
            | OnexoneError::PersonAlreadyExists { .. } => ErrorCategory::Roster,
            OnexoneError::MeetingAlreadyExists { .. } | OnexoneError::MeetingNotFound { .. } => {
                ErrorCategory::Ledger
            }
            OnexoneError::InvalidDate { .. } | OnexoneError::InvalidPersonName { .. } => {
                ErrorCategory::Input
            }
            OnexoneError::IoError(_)
            | OnexoneError::SerializationError(_)
            | OnexoneError::StorageUnavailable { .. } => ErrorCategory::Storage,
            OnexoneError::ConfigError { .. } | OnexoneError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Roster | ErrorCategory::Ledger | ErrorCategory::Input => {
                ErrorSeverity::Low
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => match self {
                OnexoneError::StorageUnavailable { .. } => ErrorSeverity::Critical,
                _ => ErrorSeverity::High,
            },
        }
    }

    /// 給終端使用者看的單行訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            OnexoneError::PersonNotFound { fragment } => format!("Can't find '{}'", fragment),
            OnexoneError::PersonAmbiguous { matches, .. } => {
                format!("Multiple persons found: {:?}", matches)
            }
            OnexoneError::PersonAlreadyExists { name } => {
                format!("*** Person '{}' already exists, no changes made", name)
            }
            OnexoneError::InvalidPersonName { name } => format!("Invalid name '{}'", name),
            OnexoneError::InvalidDate { value } => format!("Invalid date '{}'", value),
            OnexoneError::MeetingAlreadyExists { person, date } => format!(
                "*** Meeting '{}' already exists for '{}', no changes made",
                date, person
            ),
            OnexoneError::MeetingNotFound { person, date } => format!(
                "*** Meeting '{}' not found for '{}', no changes made",
                date, person
            ),
            OnexoneError::StorageUnavailable { path, .. } => {
                format!("Cannot use data location '{}'", path)
            }
            other => format!("*** Unexpected error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OnexoneError::PersonNotFound { .. } => "Check the roster with `person list`",
            OnexoneError::PersonAmbiguous { .. } => "Use a longer part of the name",
            OnexoneError::PersonAlreadyExists { .. } => "Pick a different name",
            OnexoneError::InvalidPersonName { .. } => "Names cannot be blank",
            OnexoneError::InvalidDate { .. } => "Dates must look like YYYY-MM-DD",
            OnexoneError::MeetingAlreadyExists { .. } | OnexoneError::MeetingNotFound { .. } => {
                "Check existing meetings with `person show <person>`"
            }
            OnexoneError::StorageUnavailable { .. } | OnexoneError::IoError(_) => {
                "Check that the data directory exists and is writable, or pass --data-file"
            }
            OnexoneError::SerializationError(_) => {
                "The data file may be corrupt; inspect it or restore a backup"
            }
            OnexoneError::ConfigError { .. } | OnexoneError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, OnexoneError>;
