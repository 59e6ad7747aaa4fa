//! Tool configuration loading from the project root.

use std::path::Path;

use crate::domain::config::{self, paths};
use crate::domain::{AppError, ToolConfig};
use crate::ports::ConfigStore;

/// Load `factory-injector.toml` from `root`, or defaults when it is absent.
pub fn load_tool_config<S: ConfigStore>(root: &Path, store: &S) -> Result<ToolConfig, AppError> {
    let config_path = paths::tool_config(root);

    if !store.exists(&config_path) {
        log::debug!("No {} found; using defaults", config_path.display());
        return Ok(ToolConfig::default());
    }

    let content = store.read(&config_path)?;
    config::parse_config_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::DEFAULT_CONFIG_FILE;
    use crate::testing::MemoryConfigStore;

    #[test]
    fn missing_file_yields_defaults() {
        let store = MemoryConfigStore::new();
        let config = load_tool_config(Path::new("proj"), &store).unwrap();
        assert_eq!(config.injector.config_file, DEFAULT_CONFIG_FILE);
    }

    #[test]
    fn file_in_root_is_parsed() {
        let store = MemoryConfigStore::new().with_file(
            "proj/factory-injector.toml",
            "[injector]\nconfig_file = \"config/autoload/deps.global.php\"\n",
        );
        let config = load_tool_config(Path::new("proj"), &store).unwrap();
        assert_eq!(config.injector.config_file, "config/autoload/deps.global.php");
    }

    #[test]
    fn invalid_file_is_reported() {
        let store =
            MemoryConfigStore::new().with_file("proj/factory-injector.toml", "[injector\n");
        let result = load_tool_config(Path::new("proj"), &store);
        assert!(matches!(result, Err(AppError::TomlParseError(_))));
    }
}
