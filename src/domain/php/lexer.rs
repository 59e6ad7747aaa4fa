//! Tokenizer for the declarative subset of PHP used by config files.

use super::error::PhpParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    OpenTag,
    CloseTag,
    /// A possibly qualified name: `Foo`, `Foo\Bar`, `\Foo\Bar`.
    Name(String),
    /// A string literal with escapes already applied.
    String(String),
    /// Raw numeric literal text.
    Number(String),
    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    DoubleArrow,
    DoubleColon,
    Equals,
    Minus,
    Plus,
    Backslash,
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self { chars: source.chars().collect(), pos: 0, line: 1, column: 1 }
    }

    /// Tokenize the whole source, ending with `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, PhpParseError> {
        let mut tokens = vec![self.open_tag()?];
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof || token.kind == TokenKind::CloseTag;
            tokens.push(token);
            if done {
                break;
            }
        }
        if tokens.last().map(|t| &t.kind) == Some(&TokenKind::CloseTag) {
            tokens.push(Token { kind: TokenKind::Eof, line: self.line, column: self.column });
        }
        Ok(tokens)
    }

    fn open_tag(&mut self) -> Result<Token, PhpParseError> {
        // Leading whitespace is tolerated; any other inline output is not config.
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        let (line, column) = (self.line, self.column);
        if self.starts_with_ignore_case("<?php") {
            for _ in 0.."<?php".len() {
                self.bump();
            }
            if self.peek().is_some_and(|c| !c.is_whitespace()) {
                return Err(self.error("expected whitespace after '<?php'"));
            }
            Ok(Token { kind: TokenKind::OpenTag, line, column })
        } else {
            Err(PhpParseError::new(line, column, "expected '<?php' open tag"))
        }
    }

    fn next_token(&mut self) -> Result<Token, PhpParseError> {
        self.skip_trivia()?;
        let (line, column) = (self.line, self.column);
        let token = |kind: TokenKind| -> Result<Token, PhpParseError> {
            Ok(Token { kind, line, column })
        };

        let Some(c) = self.peek() else {
            return token(TokenKind::Eof);
        };

        match c {
            '[' | ']' | '(' | ')' | '{' | '}' | ',' | ';' | '+' | '-' => {
                self.bump();
                token(match c {
                    '[' => TokenKind::LBracket,
                    ']' => TokenKind::RBracket,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    ',' => TokenKind::Comma,
                    ';' => TokenKind::Semicolon,
                    '+' => TokenKind::Plus,
                    _ => TokenKind::Minus,
                })
            }
            '=' => {
                self.bump();
                if self.peek() == Some('>') {
                    self.bump();
                    token(TokenKind::DoubleArrow)
                } else if self.peek() == Some('=') {
                    Err(self.error("comparison operators are not supported"))
                } else {
                    token(TokenKind::Equals)
                }
            }
            ':' => {
                self.bump();
                if self.peek() == Some(':') {
                    self.bump();
                    token(TokenKind::DoubleColon)
                } else {
                    Err(PhpParseError::new(line, column, "unexpected ':'"))
                }
            }
            '?' if self.peek_at(1) == Some('>') => {
                self.bump();
                self.bump();
                token(TokenKind::CloseTag)
            }
            '\'' => {
                let value = self.single_quoted()?;
                token(TokenKind::String(value))
            }
            '"' => {
                let value = self.double_quoted()?;
                token(TokenKind::String(value))
            }
            '$' => Err(PhpParseError::new(line, column, "variables are not supported")),
            '\\' => {
                if self.peek_at(1).is_some_and(is_label_start) {
                    self.bump();
                    let name = self.qualified_name();
                    token(TokenKind::Name(format!("\\{}", name)))
                } else {
                    self.bump();
                    token(TokenKind::Backslash)
                }
            }
            c if c.is_ascii_digit()
                || (c == '.' && self.peek_at(1).is_some_and(|n| n.is_ascii_digit())) =>
            {
                token(TokenKind::Number(self.number()))
            }
            c if is_label_start(c) => token(TokenKind::Name(self.qualified_name())),
            other => {
                Err(PhpParseError::new(line, column, format!("unexpected character '{}'", other)))
            }
        }
    }

    fn skip_trivia(&mut self) -> Result<(), PhpParseError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('#') if self.peek_at(1) == Some('[') => {
                    return Err(self.error("attributes are not supported"));
                }
                Some('#') => self.skip_line_comment(),
                Some('/') if self.peek_at(1) == Some('/') => self.skip_line_comment(),
                Some('/') if self.peek_at(1) == Some('*') => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            // A close tag ends a single-line comment.
            if c == '\n' || (c == '?' && self.peek_at(1) == Some('>')) {
                break;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), PhpParseError> {
        let (line, column) = (self.line, self.column);
        self.bump();
        self.bump();
        loop {
            match self.peek() {
                None => return Err(PhpParseError::new(line, column, "unterminated comment")),
                Some('*') if self.peek_at(1) == Some('/') => {
                    self.bump();
                    self.bump();
                    return Ok(());
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn qualified_name(&mut self) -> String {
        let mut name = self.label();
        while self.peek() == Some('\\') && self.peek_at(1).is_some_and(is_label_start) {
            self.bump();
            name.push('\\');
            name.push_str(&self.label());
        }
        name
    }

    fn label(&mut self) -> String {
        let mut label = String::new();
        while let Some(c) = self.peek() {
            if is_label_start(c) || c.is_ascii_digit() {
                label.push(c);
                self.bump();
            } else {
                break;
            }
        }
        label
    }

    fn number(&mut self) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            let exponent_sign =
                (c == '+' || c == '-') && text.ends_with(['e', 'E']) && !is_prefixed_int(&text);
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        text
    }

    fn single_quoted(&mut self) -> Result<String, PhpParseError> {
        let (line, column) = (self.line, self.column);
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(PhpParseError::new(line, column, "unterminated string")),
                Some('\'') => return Ok(value),
                Some('\\') => match self.peek() {
                    Some(next @ ('\\' | '\'')) => {
                        value.push(next);
                        self.bump();
                    }
                    _ => value.push('\\'),
                },
                Some(c) => value.push(c),
            }
        }
    }

    fn double_quoted(&mut self) -> Result<String, PhpParseError> {
        let (line, column) = (self.line, self.column);
        self.bump();
        let mut value = String::new();
        loop {
            let Some(c) = self.peek() else {
                return Err(PhpParseError::new(line, column, "unterminated string"));
            };
            match c {
                '"' => {
                    self.bump();
                    return Ok(value);
                }
                '$' if self.peek_at(1).is_some_and(|n| is_label_start(n) || n == '{') => {
                    return Err(self.error("string interpolation is not supported"));
                }
                '{' if self.peek_at(1) == Some('$') => {
                    return Err(self.error("string interpolation is not supported"));
                }
                '\\' => {
                    self.bump();
                    self.escape_sequence(&mut value)?;
                }
                _ => {
                    value.push(c);
                    self.bump();
                }
            }
        }
    }

    fn escape_sequence(&mut self, value: &mut String) -> Result<(), PhpParseError> {
        let simple = match self.peek() {
            Some('n') => Some('\n'),
            Some('t') => Some('\t'),
            Some('r') => Some('\r'),
            Some('v') => Some('\u{0B}'),
            Some('e') => Some('\u{1B}'),
            Some('f') => Some('\u{0C}'),
            Some('\\') => Some('\\'),
            Some('$') => Some('$'),
            Some('"') => Some('"'),
            _ => None,
        };
        if let Some(escaped) = simple {
            self.bump();
            value.push(escaped);
            return Ok(());
        }

        match self.peek() {
            Some('x') if self.peek_at(1).is_some_and(|c| c.is_ascii_hexdigit()) => {
                self.bump();
                let digits = self.take_while_max(2, |c| c.is_ascii_hexdigit());
                self.push_code(value, &digits, 16)
            }
            Some('0'..='7') => {
                let digits = self.take_while_max(3, |c| ('0'..='7').contains(&c));
                self.push_code(value, &digits, 8)
            }
            Some('u') if self.peek_at(1) == Some('{') => {
                self.bump();
                self.bump();
                let digits = self.take_while_max(6, |c| c.is_ascii_hexdigit());
                if self.bump() != Some('}') {
                    return Err(self.error("malformed unicode escape"));
                }
                self.push_code(value, &digits, 16)
            }
            _ => {
                value.push('\\');
                Ok(())
            }
        }
    }

    fn push_code(&self, value: &mut String, digits: &str, radix: u32) -> Result<(), PhpParseError> {
        let code = u32::from_str_radix(digits, radix)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error("invalid escape sequence"))?;
        value.push(code);
        Ok(())
    }

    fn take_while_max(&mut self, max: usize, accept: impl Fn(char) -> bool) -> String {
        let mut taken = String::new();
        while taken.len() < max {
            match self.peek() {
                Some(c) if accept(c) => {
                    taken.push(c);
                    self.bump();
                }
                _ => break,
            }
        }
        taken
    }

    fn starts_with_ignore_case(&self, expected: &str) -> bool {
        expected
            .chars()
            .enumerate()
            .all(|(offset, e)| self.peek_at(offset).is_some_and(|c| c.eq_ignore_ascii_case(&e)))
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error<S: Into<String>>(&self, message: S) -> PhpParseError {
        PhpParseError::new(self.line, self.column, message)
    }
}

pub(crate) fn is_label_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_prefixed_int(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.starts_with("0x") || lower.starts_with("0b")
}
