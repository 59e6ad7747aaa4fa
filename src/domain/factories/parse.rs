//! Pure parse/validate for the factories config file.

use std::path::Path;

use super::mapping::FactoryMapping;
use crate::domain::php::{self, ArrayKey, PhpValue};
use crate::domain::{AppError, TypeIdentifier};

/// Read the `dependencies.factories` mapping from config file content.
///
/// A missing `dependencies` or `factories` entry yields an empty mapping.
pub fn parse_factories_content(path: &Path, content: &str) -> Result<FactoryMapping, AppError> {
    let config =
        php::parse_config(content).map_err(|e| AppError::integrity(path, e.to_string()))?;
    let root = config.as_array().ok_or_else(|| {
        AppError::integrity(path, format!("expected an array, file returns {}", config.type_name()))
    })?;

    let Some(dependencies) = root.get("dependencies") else {
        return Ok(FactoryMapping::new());
    };
    let dependencies = expect_array(path, "dependencies", dependencies)?;

    let Some(factories) = dependencies.get("factories") else {
        return Ok(FactoryMapping::new());
    };
    let factories = expect_array(path, "dependencies.factories", factories)?;

    factories
        .iter()
        .map(|(key, value)| -> Result<(TypeIdentifier, TypeIdentifier), AppError> {
            let class = match key {
                ArrayKey::String(class) => type_identifier(path, class)?,
                ArrayKey::Int(index) => {
                    return Err(AppError::integrity(
                        path,
                        format!("factory entry {} has no class name key", index),
                    ));
                }
            };
            let factory = match value {
                PhpValue::String(name) | PhpValue::Class(name) => type_identifier(path, name)?,
                other => {
                    return Err(AppError::integrity(
                        path,
                        format!(
                            "factory for '{}' must be a class name, found {}",
                            class,
                            other.type_name()
                        ),
                    ));
                }
            };
            Ok((class, factory))
        })
        .collect()
}

fn expect_array<'a>(
    path: &Path,
    what: &str,
    value: &'a PhpValue,
) -> Result<&'a php::PhpArray, AppError> {
    value.as_array().ok_or_else(|| {
        let details = format!("'{}' must be an array, found {}", what, value.type_name());
        AppError::integrity(path, details)
    })
}

fn type_identifier(path: &Path, name: &str) -> Result<TypeIdentifier, AppError> {
    TypeIdentifier::new(name)
        .map_err(|_| AppError::integrity(path, format!("'{}' is not a valid class name", name)))
}
