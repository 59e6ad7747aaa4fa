/// Failure reading a PHP configuration file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {column}: {message}")]
pub struct PhpParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl PhpParseError {
    pub(crate) fn new<S: Into<String>>(line: usize, column: usize, message: S) -> Self {
        Self { line, column, message: message.into() }
    }
}
