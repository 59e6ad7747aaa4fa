pub mod config;
pub mod error;
pub mod factories;
pub mod identities;
pub mod php;

pub use config::{InjectorConfig, ToolConfig};
pub use error::AppError;
pub use factories::{FactoryEntry, FactoryMapping};
pub use identities::TypeIdentifier;
