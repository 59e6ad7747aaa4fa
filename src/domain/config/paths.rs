use std::path::{Path, PathBuf};

/// Tool configuration file name, looked up in the project root.
pub const TOOL_CONFIG_FILE: &str = "factory-injector.toml";

/// `factory-injector.toml` under `root`.
pub fn tool_config(root: &Path) -> PathBuf {
    root.join(TOOL_CONFIG_FILE)
}

/// Location of the factories file for an optional project root.
///
/// Without a root the relative path is returned unchanged. Otherwise the
/// root is stripped of trailing `/` and joined with a single `/`.
pub fn factories_file(project_root: Option<&str>, config_file: &str) -> PathBuf {
    match project_root {
        None | Some("") => PathBuf::from(config_file),
        Some(root) => PathBuf::from(format!("{}/{}", root.trim_end_matches('/'), config_file)),
    }
}
