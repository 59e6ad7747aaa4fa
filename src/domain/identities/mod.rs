pub mod type_identifier;

pub use type_identifier::TypeIdentifier;
