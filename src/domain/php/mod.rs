//! Static reader for PHP configuration arrays.
//!
//! Config files are parsed, never executed. Only the declarative subset
//! that returns array literals is understood; anything else is reported
//! with its source position.

pub mod error;
pub mod lexer;
pub mod names;
pub mod parser;
pub mod value;

pub use error::PhpParseError;
pub use parser::parse_config;
pub use value::{ArrayKey, PhpArray, PhpValue};
