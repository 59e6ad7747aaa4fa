//! factory-injector: register dependency-injection factories in a generated PHP config file.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use adapters::FilesystemConfigStore;
use app::config::load_tool_config;

pub use app::commands::ConfigInjector;
pub use domain::{AppError, FactoryMapping, InjectorConfig, ToolConfig, TypeIdentifier};

/// Register `factory` as the factory for `class`.
///
/// The factories file is located from `factory-injector.toml` in the project
/// root when present, else `config/autoload/factory-injector-factories.global.php`.
/// Without a project root, paths are relative to the current directory.
///
/// Returns the path of the rewritten config file.
pub fn inject_factory(
    project_root: Option<&str>,
    class: &str,
    factory: &str,
) -> Result<PathBuf, AppError> {
    let store = FilesystemConfigStore::new();
    let config = load_tool_config(project_dir(project_root), &store)?;

    let injector = ConfigInjector::new(store, &config.injector, project_root);
    injector.inject(class, factory)
}

/// Read the factories currently registered under `project_root`.
pub fn registered_factories(project_root: Option<&str>) -> Result<FactoryMapping, AppError> {
    let store = FilesystemConfigStore::new();
    let config = load_tool_config(project_dir(project_root), &store)?;

    ConfigInjector::new(store, &config.injector, project_root).load()
}

fn project_dir(project_root: Option<&str>) -> &Path {
    match project_root {
        Some(root) if !root.is_empty() => Path::new(root),
        _ => Path::new("."),
    }
}
