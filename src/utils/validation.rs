use crate::utils::error::{OnexoneError, Result};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 只接受 YYYY-MM-DD，且必須是真實存在的日期
pub fn validate_date(value: &str) -> Result<NaiveDate> {
    let invalid = || OnexoneError::InvalidDate {
        value: value.to_string(),
    };

    // chrono 會接受未補零的月份/日期，這裡要求固定長度以維持字典序 == 時間序
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
    {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

pub fn validate_person_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(OnexoneError::InvalidPersonName {
            name: name.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(OnexoneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(OnexoneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
    if !valid_levels.contains(&level) {
        return Err(OnexoneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Valid levels: {}", valid_levels.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("2020-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert!(validate_date("2020-02-29").is_ok());
        assert!(validate_date("2020-13-40").is_err());
        assert!(validate_date("2021-02-29").is_err());
        assert!(validate_date("not-a-date").is_err());
        assert!(validate_date("2020-1-05").is_err());
        assert!(validate_date("2020/01/01").is_err());
        assert!(validate_date("").is_err());
        assert!(validate_date(" 2020-01-01").is_err());
    }

    #[test]
    fn test_validate_person_name() {
        assert_eq!(validate_person_name("  Alice Smith ").unwrap(), "Alice Smith");
        assert!(matches!(
            validate_person_name("   "),
            Err(OnexoneError::InvalidPersonName { .. })
        ));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.data_file", "/tmp/data.json").is_ok());
        assert!(validate_path("storage.data_file", "").is_err());
        assert!(validate_path("storage.data_file", "a\0b").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("logging.level", "debug").is_ok());
        assert!(validate_log_level("logging.level", "loud").is_err());
    }
}
