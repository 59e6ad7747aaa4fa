//! Concrete implementations of ports and embedded assets.

pub mod factories_template;
pub mod filesystem_config_store;

pub use factories_template::render_factories_file;
pub use filesystem_config_store::FilesystemConfigStore;
