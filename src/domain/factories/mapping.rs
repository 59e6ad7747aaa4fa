use std::collections::BTreeMap;

use serde::Serialize;

use super::natural_order::natural_cmp;
use crate::domain::TypeIdentifier;

/// Class-to-factory registrations persisted in the factories config file.
///
/// Keys are unique; inserting an existing class replaces its factory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactoryMapping {
    entries: BTreeMap<TypeIdentifier, TypeIdentifier>,
}

/// One rendered registration line, as `::class` constant expressions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactoryEntry {
    pub class: String,
    pub factory: String,
}

impl FactoryMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for `class`, returning the factory it replaced.
    pub fn upsert(
        &mut self,
        class: TypeIdentifier,
        factory: TypeIdentifier,
    ) -> Option<TypeIdentifier> {
        self.entries.insert(class, factory)
    }

    pub fn get(&self, class: &TypeIdentifier) -> Option<&TypeIdentifier> {
        self.entries.get(class)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by class name in natural order.
    pub fn sorted_entries(&self) -> Vec<FactoryEntry> {
        let mut pairs: Vec<_> = self.entries.iter().collect();
        pairs.sort_by(|(a, _), (b, _)| natural_cmp(a.as_str(), b.as_str()));
        pairs
            .into_iter()
            .map(|(class, factory)| FactoryEntry {
                class: class.class_constant(),
                factory: factory.class_constant(),
            })
            .collect()
    }
}

impl FromIterator<(TypeIdentifier, TypeIdentifier)> for FactoryMapping {
    fn from_iter<I: IntoIterator<Item = (TypeIdentifier, TypeIdentifier)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> TypeIdentifier {
        TypeIdentifier::new(name).unwrap()
    }

    #[test]
    fn upsert_overwrites_existing_class() {
        let mut mapping = FactoryMapping::new();
        assert_eq!(mapping.upsert(id("App\\A"), id("App\\F1")), None);
        assert_eq!(mapping.upsert(id("App\\A"), id("App\\F2")), Some(id("App\\F1")));

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get(&id("App\\A")), Some(&id("App\\F2")));
    }

    #[test]
    fn sorted_entries_use_natural_order() {
        let mapping: FactoryMapping = ["Zeta", "Alpha", "Beta2", "Beta10"]
            .iter()
            .map(|name| (id(name), id("Factory")))
            .collect();

        let classes: Vec<String> = mapping.sorted_entries().into_iter().map(|e| e.class).collect();
        assert_eq!(
            classes,
            vec!["Alpha::class", "Beta2::class", "Beta10::class", "Zeta::class"]
        );
    }

    #[test]
    fn sorted_entries_hold_class_constants() {
        let mapping: FactoryMapping =
            [(id("\\App\\Handler\\Ping"), id("App\\Handler\\PingFactory"))].into_iter().collect();

        assert_eq!(
            mapping.sorted_entries(),
            vec![FactoryEntry {
                class: "App\\Handler\\Ping::class".to_string(),
                factory: "App\\Handler\\PingFactory::class".to_string(),
            }]
        );
    }

    #[test]
    fn new_mapping_is_empty() {
        let mapping = FactoryMapping::new();
        assert!(mapping.is_empty());
        assert!(mapping.sorted_entries().is_empty());
    }
}
