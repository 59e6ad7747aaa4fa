//! Injector configuration domain models.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Relative location of the generated factories file.
pub const DEFAULT_CONFIG_FILE: &str = "config/autoload/factory-injector-factories.global.php";

/// Generator name written into the generated file header.
pub const DEFAULT_GENERATOR: &str = "factory-injector";

/// Tool configuration loaded from `factory-injector.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    #[serde(default)]
    pub injector: InjectorConfig,
}

impl ToolConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.injector.validate()
    }
}

/// Settings for the factories config file the injector maintains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InjectorConfig {
    /// Config file path, relative to the project root.
    #[serde(default = "default_config_file")]
    pub config_file: String,
    /// Name written in the "This file generated by" header line.
    #[serde(default = "default_generator")]
    pub generator: String,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self { config_file: default_config_file(), generator: default_generator() }
    }
}

impl InjectorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.config_file.trim().is_empty() {
            return Err(AppError::config_error("injector.config_file must not be empty"));
        }
        if Path::new(&self.config_file).is_absolute() || self.config_file.starts_with('/') {
            return Err(AppError::config_error(format!(
                "injector.config_file must be relative to the project root: {}",
                self.config_file
            )));
        }
        if self.generator.trim().is_empty() {
            return Err(AppError::config_error("injector.generator must not be empty"));
        }
        if self.generator.contains("*/") || self.generator.contains('\n') {
            return Err(AppError::config_error(
                "injector.generator must be a single line without '*/'",
            ));
        }
        Ok(())
    }
}

fn default_config_file() -> String {
    DEFAULT_CONFIG_FILE.to_string()
}

fn default_generator() -> String {
    DEFAULT_GENERATOR.to_string()
}
