//! Pure parse/validate for tool configuration (`factory-injector.toml`).

use crate::domain::AppError;
use crate::domain::config::ToolConfig;

/// Parse and validate tool configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ToolConfig, AppError> {
    let config: ToolConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
