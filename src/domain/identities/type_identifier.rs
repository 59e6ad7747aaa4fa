use std::fmt;

use crate::domain::AppError;

/// A validated, fully-qualified type name such as `App\Handler\PingHandler`.
///
/// Guarantees:
/// - Non-empty, stored without a leading `\`
/// - One or more `\`-separated segments
/// - Each segment starts with a letter, `_`, or a non-ASCII character,
///   and continues with those or ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeIdentifier(String);

impl TypeIdentifier {
    /// Validate and create a new instance. A single leading `\` is accepted.
    pub fn new(name: &str) -> Result<Self, AppError> {
        let trimmed = name.strip_prefix('\\').unwrap_or(name);
        if is_qualified_name(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(AppError::InvalidTypeIdentifier(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The class-constant expression for this type, e.g. `App\Foo::class`.
    pub fn class_constant(&self) -> String {
        format!("{}::class", self.0)
    }
}

fn is_qualified_name(name: &str) -> bool {
    !name.is_empty() && name.split('\\').all(is_label)
}

fn is_label(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if is_label_start(first) => {
            chars.all(|c| is_label_start(c) || c.is_ascii_digit())
        }
        _ => false,
    }
}

fn is_label_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

impl std::ops::Deref for TypeIdentifier {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
