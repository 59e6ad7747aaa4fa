/// A value produced by a declarative PHP expression.
#[derive(Debug, Clone, PartialEq)]
pub enum PhpValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// A resolved `Name::class` expression, stored without leading `\`.
    Class(String),
    /// A bare constant whose value is not known statically.
    Constant(String),
    Array(PhpArray),
}

impl PhpValue {
    pub fn as_array(&self) -> Option<&PhpArray> {
        match self {
            PhpValue::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Short description of the value kind, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            PhpValue::Null => "null",
            PhpValue::Bool(_) => "bool",
            PhpValue::Int(_) => "int",
            PhpValue::Float(_) => "float",
            PhpValue::String(_) => "string",
            PhpValue::Class(_) => "class name",
            PhpValue::Constant(_) => "constant",
            PhpValue::Array(_) => "array",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    String(String),
}

impl ArrayKey {
    /// Apply PHP's key normalization: decimal integer strings become ints.
    pub fn from_string(value: String) -> Self {
        match value.parse::<i64>() {
            Ok(int) if int.to_string() == value => ArrayKey::Int(int),
            _ => ArrayKey::String(value),
        }
    }
}

/// Ordered PHP array preserving insertion order and key uniqueness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhpArray {
    entries: Vec<(ArrayKey, PhpValue)>,
}

impl PhpArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `key`; an existing key keeps its position.
    pub fn insert(&mut self, key: ArrayKey, value: PhpValue) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Append `value` at the next integer index.
    pub fn push(&mut self, value: PhpValue) {
        let next = self
            .entries
            .iter()
            .filter_map(|(key, _)| match key {
                ArrayKey::Int(int) => Some(int.saturating_add(1)),
                ArrayKey::String(_) => None,
            })
            .max()
            .unwrap_or(0)
            .max(0);
        self.entries.push((ArrayKey::Int(next), value));
    }

    pub fn get(&self, key: &str) -> Option<&PhpValue> {
        let key = ArrayKey::from_string(key.to_string());
        self.entries.iter().find(|(existing, _)| *existing == key).map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ArrayKey, PhpValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
