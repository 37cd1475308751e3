#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{OnexoneError, Result};
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const APP_NAME: &str = "onexone";
pub const SAVE_FILE: &str = "onexone-data.json";
pub const CONFIG_FILE: &str = "config.toml";

/// Runtime configuration, resolved once at startup and passed down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub config_dir: PathBuf,
    pub data_file: PathBuf,
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        Self {
            data_file: config_dir.join(SAVE_FILE),
            config_dir,
            log_level: None,
        }
    }

    /// 平台的使用者設定目錄，例如 ~/.config/onexone
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME))
            .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_NAME)))
    }

    /// Precedence: `data_file_override` > config file > defaults. An explicit
    /// `config_file` must exist; the default one is optional.
    pub fn resolve(config_file: Option<&Path>, data_file_override: Option<&Path>) -> Result<Self> {
        Self::resolve_in(
            Self::default_config_dir(),
            config_file,
            data_file_override,
        )
    }

    pub fn resolve_in(
        config_dir: PathBuf,
        config_file: Option<&Path>,
        data_file_override: Option<&Path>,
    ) -> Result<Self> {
        let mut config = Self::with_config_dir(config_dir);

        let toml = match config_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(OnexoneError::ConfigError {
                        message: format!("Config file not found: {}", path.display()),
                    });
                }
                Some(TomlConfig::from_file(path)?)
            }
            None => {
                let default_path = config.config_dir.join(CONFIG_FILE);
                if default_path.is_file() {
                    Some(TomlConfig::from_file(&default_path)?)
                } else {
                    None
                }
            }
        };

        if let Some(toml) = toml {
            toml.validate()?;
            config.apply_toml(&toml);
        }

        if let Some(path) = data_file_override {
            config.data_file = path.to_path_buf();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn apply_toml(&mut self, toml: &TomlConfig) {
        if let Some(data_file) = toml.data_file() {
            self.data_file = PathBuf::from(data_file);
        }
        if let Some(level) = toml.log_level() {
            self.log_level = Some(level.to_string());
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        let data_file = self.data_file.to_str().ok_or_else(|| {
            OnexoneError::InvalidConfigValueError {
                field: "data_file".to_string(),
                value: self.data_file.display().to_string(),
                reason: "Path is not valid UTF-8".to_string(),
            }
        })?;
        validation::validate_path("data_file", data_file)?;
        if let Some(level) = &self.log_level {
            validation::validate_log_level("log_level", level)?;
        }
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn data_file(&self) -> &Path {
        &self.data_file
    }
}
