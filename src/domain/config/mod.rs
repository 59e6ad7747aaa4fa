pub mod injector_config;
pub mod parse;
pub mod paths;

pub use injector_config::{DEFAULT_CONFIG_FILE, DEFAULT_GENERATOR, InjectorConfig, ToolConfig};
pub use parse::parse_config_content;
