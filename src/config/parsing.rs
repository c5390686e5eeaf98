use std::fs::read_to_string;
use std::path::Path;

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no such file or directory: {0}")]
    FileNotFound(String),
    #[error("specified path is a directory: {0}")]
    PathIsDirectory(String),
    #[error("error opening/reading file: {0}")]
    IOError(#[from] std::io::Error),
    #[error("json parse error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("toml parse error: {0}")]
    SerdeTomlError(#[from] toml::de::Error),
    #[error("yaml parse error: {0}")]
    SerdeYamlError(#[from] serde_yml::Error),
}

impl Config {
    pub fn from_str_with_extension(content: &str, file: &str) -> Result<Self, ConfigError> {
        if file.ends_with(".yml") || file.ends_with(".yaml") {
            Ok(serde_yml::from_str(content)?)
        } else if file.ends_with(".toml") {
            Ok(toml::from_str(content)?)
        } else {
            Ok(serde_json::from_str(content)?)
        }
    }
}

impl<'a> TryFrom<&'a str> for Config {
    type Error = ConfigError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        let path = Path::new(value);
        if !path.exists() {
            Err(ConfigError::FileNotFound(value.to_owned()))
        } else if !path.is_file() {
            Err(ConfigError::PathIsDirectory(value.to_owned()))
        } else {
            let content = read_to_string(path)?;
            Config::from_str_with_extension(&content, value)
        }
    }
}

impl TryFrom<String> for Config {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
