//! Factory registration: load, upsert, sort, rewrite.

use std::path::{Path, PathBuf};

use crate::adapters::render_factories_file;
use crate::domain::config::paths;
use crate::domain::factories::parse_factories_content;
use crate::domain::{AppError, FactoryMapping, InjectorConfig, TypeIdentifier};
use crate::ports::ConfigStore;

/// Registers class factories in the generated factories config file.
///
/// Every call re-reads the file, so no mapping state is kept between calls.
/// The whole file is rewritten on each registration; entries outside
/// `dependencies.factories` do not survive.
pub struct ConfigInjector<S: ConfigStore> {
    store: S,
    config_file: PathBuf,
    generator: String,
}

impl<S: ConfigStore> ConfigInjector<S> {
    /// Create an injector for `config.config_file`, optionally under `project_root`.
    pub fn new(store: S, config: &InjectorConfig, project_root: Option<&str>) -> Self {
        Self {
            store,
            config_file: paths::factories_file(project_root, &config.config_file),
            generator: config.generator.clone(),
        }
    }

    /// Path of the config file this injector maintains.
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Register `factory` for `class` and return the path written.
    pub fn inject(&self, class: &str, factory: &str) -> Result<PathBuf, AppError> {
        let class = TypeIdentifier::new(class)?;
        let factory = TypeIdentifier::new(factory)?;
        self.inject_factory_for_class(class, factory)
    }

    /// Register an already validated class/factory pair.
    pub fn inject_factory_for_class(
        &self,
        class: TypeIdentifier,
        factory: TypeIdentifier,
    ) -> Result<PathBuf, AppError> {
        if !self.store.is_writable(&self.config_file) {
            return Err(AppError::ResourceNotWritable(self.config_file.clone()));
        }

        let mut mapping = self.load()?;
        if let Some(previous) = mapping.upsert(class.clone(), factory.clone()) {
            log::debug!("Replacing factory {} for {}", previous, class);
        }

        let content = render_factories_file(&self.generator, &mapping)?;
        self.store.write(&self.config_file, &content)?;
        log::info!(
            "Registered {} => {} in {} ({} entries)",
            class,
            factory,
            self.config_file.display(),
            mapping.len()
        );

        Ok(self.config_file.clone())
    }

    /// Read the current mapping; a missing file is an empty mapping.
    pub fn load(&self) -> Result<FactoryMapping, AppError> {
        if !self.store.exists(&self.config_file) {
            log::debug!("{} does not exist; starting empty", self.config_file.display());
            return Ok(FactoryMapping::new());
        }

        let content = self.store.read(&self.config_file)?;
        let mapping = parse_factories_content(&self.config_file, &content)?;
        log::debug!(
            "Loaded {} factories from {}",
            mapping.len(),
            self.config_file.display()
        );
        Ok(mapping)
    }
}
