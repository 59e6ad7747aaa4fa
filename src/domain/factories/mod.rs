pub mod mapping;
pub mod natural_order;
pub mod parse;

pub use mapping::{FactoryEntry, FactoryMapping};
pub use natural_order::natural_cmp;
pub use parse::parse_factories_content;
