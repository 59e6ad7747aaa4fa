//! Class name resolution against `namespace` and `use` declarations.

use std::collections::HashMap;

/// Names in scope for resolving `Name::class` expressions.
#[derive(Debug, Clone, Default)]
pub struct NameScope {
    namespace: Option<String>,
    imports: HashMap<String, String>,
}

impl NameScope {
    pub fn set_namespace(&mut self, namespace: &str) {
        let namespace = namespace.trim_start_matches('\\');
        self.namespace = (!namespace.is_empty()).then(|| namespace.to_string());
        self.imports.clear();
    }

    /// Register `use target as alias;`. Returns false when the alias is taken.
    pub fn import(&mut self, target: &str, alias: Option<&str>) -> bool {
        let target = target.trim_start_matches('\\');
        let alias = alias.unwrap_or_else(|| last_segment(target));
        let key = alias.to_ascii_lowercase();
        if self.imports.contains_key(&key) {
            return false;
        }
        self.imports.insert(key, target.to_string());
        true
    }

    /// Resolve a class name the way the PHP compiler does.
    pub fn resolve(&self, name: &str) -> String {
        if let Some(fully_qualified) = name.strip_prefix('\\') {
            return fully_qualified.to_string();
        }

        let (first, rest) = match name.split_once('\\') {
            Some((first, rest)) => (first, Some(rest)),
            None => (name, None),
        };

        if first.eq_ignore_ascii_case("namespace") {
            if let Some(rest) = rest {
                return self.qualify(rest);
            }
        }

        if let Some(target) = self.imports.get(&first.to_ascii_lowercase()) {
            return match rest {
                Some(rest) => format!("{}\\{}", target, rest),
                None => target.clone(),
            };
        }

        self.qualify(name)
    }

    fn qualify(&self, name: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}\\{}", namespace, name),
            None => name.to_string(),
        }
    }
}

fn last_segment(name: &str) -> &str {
    name.rsplit('\\').next().unwrap_or(name)
}
