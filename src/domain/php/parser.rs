//! Recursive-descent reader for `<?php ... return <expr>;` config files.

use super::error::PhpParseError;
use super::lexer::{Lexer, Token, TokenKind};
use super::names::NameScope;
use super::value::{ArrayKey, PhpArray, PhpValue};

/// Read the value returned by a PHP config file without executing it.
pub fn parse_config(source: &str) -> Result<PhpValue, PhpParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::new(tokens).file()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    scope: NameScope,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0, scope: NameScope::default() }
    }

    fn file(mut self) -> Result<PhpValue, PhpParseError> {
        self.expect(TokenKind::OpenTag, "'<?php'")?;
        loop {
            let token = self.advance();
            let keyword = match &token.kind {
                TokenKind::Name(name) => name.to_ascii_lowercase(),
                TokenKind::Eof | TokenKind::CloseTag => {
                    return Err(self.error_at(&token, "config file does not return a value"));
                }
                _ => return Err(self.unexpected(&token)),
            };
            match keyword.as_str() {
                "declare" => self.declare()?,
                "namespace" => self.namespace(&token)?,
                "use" => self.use_statement()?,
                "return" => {
                    let value = self.expression()?;
                    self.expect_statement_end()?;
                    return Ok(value);
                }
                _ => {
                    let message = format!("unsupported statement '{}'", keyword);
                    return Err(self.error_at(&token, message));
                }
            }
        }
    }

    fn declare(&mut self) -> Result<(), PhpParseError> {
        self.expect(TokenKind::LParen, "'('")?;
        loop {
            self.name()?;
            self.expect(TokenKind::Equals, "'='")?;
            self.expression()?;
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        self.expect_statement_end()
    }

    fn namespace(&mut self, keyword: &Token) -> Result<(), PhpParseError> {
        let name = self.name()?;
        if self.peek().kind == TokenKind::LBrace {
            return Err(self.error_at(keyword, "braced namespace blocks are not supported"));
        }
        self.scope.set_namespace(&name);
        self.expect_statement_end()
    }

    fn use_statement(&mut self) -> Result<(), PhpParseError> {
        let kind_only_classes = !self.eat_keyword("function") && !self.eat_keyword("const");
        loop {
            let prefix = self.name()?;
            if self.eat(&TokenKind::Backslash) {
                self.group_use(&prefix, kind_only_classes)?;
            } else {
                let alias = self.alias()?;
                if kind_only_classes {
                    self.register_import(&prefix, alias.as_deref())?;
                }
            }
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect_statement_end()
    }

    fn group_use(&mut self, prefix: &str, classes: bool) -> Result<(), PhpParseError> {
        self.expect(TokenKind::LBrace, "'{'")?;
        loop {
            if self.peek().kind == TokenKind::RBrace {
                break;
            }
            let is_class =
                classes && !self.eat_keyword("function") && !self.eat_keyword("const");
            let name = self.name()?;
            let alias = self.alias()?;
            if is_class {
                self.register_import(&format!("{}\\{}", prefix, name), alias.as_deref())?;
            }
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(())
    }

    fn alias(&mut self) -> Result<Option<String>, PhpParseError> {
        if self.eat_keyword("as") { self.name().map(Some) } else { Ok(None) }
    }

    fn register_import(&mut self, target: &str, alias: Option<&str>) -> Result<(), PhpParseError> {
        if self.scope.import(target, alias) {
            Ok(())
        } else {
            let token = self.previous();
            Err(self.error_at(&token, format!("duplicate import of '{}'", target)))
        }
    }

    fn expression(&mut self) -> Result<PhpValue, PhpParseError> {
        let token = self.advance();
        match &token.kind {
            TokenKind::LBracket => self.array_items(TokenKind::RBracket),
            TokenKind::String(value) => Ok(PhpValue::String(value.clone())),
            TokenKind::Number(text) => self.number(&token, text, false),
            TokenKind::Minus | TokenKind::Plus => {
                let negative = token.kind == TokenKind::Minus;
                let operand = self.advance();
                match &operand.kind {
                    TokenKind::Number(text) => self.number(&operand, text, negative),
                    _ => Err(self.unexpected(&operand)),
                }
            }
            TokenKind::Name(name) => self.name_expression(&token, name),
            _ => Err(self.unexpected(&token)),
        }
    }

    fn name_expression(&mut self, token: &Token, name: &str) -> Result<PhpValue, PhpParseError> {
        if self.eat(&TokenKind::DoubleColon) {
            let member = self.advance();
            return match &member.kind {
                TokenKind::Name(member_name) if member_name.eq_ignore_ascii_case("class") => {
                    self.class_constant(token, name)
                }
                _ => Err(self.error_at(&member, "only '::class' constants are supported")),
            };
        }

        if self.peek().kind == TokenKind::LParen {
            if name.eq_ignore_ascii_case("array") {
                self.advance();
                return self.array_items(TokenKind::RParen);
            }
            let message = format!("function call '{}()' is not supported", name);
            return Err(self.error_at(token, message));
        }

        Ok(match name.to_ascii_lowercase().as_str() {
            "true" => PhpValue::Bool(true),
            "false" => PhpValue::Bool(false),
            "null" => PhpValue::Null,
            _ => PhpValue::Constant(name.trim_start_matches('\\').to_string()),
        })
    }

    fn class_constant(&self, token: &Token, name: &str) -> Result<PhpValue, PhpParseError> {
        if ["self", "static", "parent"].iter().any(|reserved| name.eq_ignore_ascii_case(reserved)) {
            let message = format!("'{}::class' has no meaning outside a class", name);
            return Err(self.error_at(token, message));
        }
        Ok(PhpValue::Class(self.scope.resolve(name)))
    }

    fn array_items(&mut self, close: TokenKind) -> Result<PhpValue, PhpParseError> {
        let mut array = PhpArray::new();
        loop {
            if self.eat(&close) {
                return Ok(PhpValue::Array(array));
            }
            let first = self.expression()?;
            if self.eat(&TokenKind::DoubleArrow) {
                let key_token = self.previous();
                let key = self.array_key(&key_token, first)?;
                let value = self.expression()?;
                array.insert(key, value);
            } else {
                array.push(first);
            }
            if !self.eat(&TokenKind::Comma) {
                self.expect(close, "',' or end of array")?;
                return Ok(PhpValue::Array(array));
            }
        }
    }

    fn array_key(&self, token: &Token, key: PhpValue) -> Result<ArrayKey, PhpParseError> {
        match key {
            PhpValue::String(value) | PhpValue::Class(value) => Ok(ArrayKey::from_string(value)),
            PhpValue::Int(value) => Ok(ArrayKey::Int(value)),
            PhpValue::Bool(value) => Ok(ArrayKey::Int(i64::from(value))),
            PhpValue::Null => Ok(ArrayKey::String(String::new())),
            PhpValue::Float(value) => Ok(ArrayKey::Int(value.trunc() as i64)),
            other => Err(self.error_at(
                token,
                format!("{} cannot be used as an array key", other.type_name()),
            )),
        }
    }

    fn number(&self, token: &Token, text: &str, negative: bool) -> Result<PhpValue, PhpParseError> {
        let digits = text.replace('_', "");
        let lower = digits.to_ascii_lowercase();
        let int = if let Some(hex) = lower.strip_prefix("0x") {
            i64::from_str_radix(hex, 16).ok()
        } else if let Some(bin) = lower.strip_prefix("0b") {
            i64::from_str_radix(bin, 2).ok()
        } else if let Some(oct) = lower.strip_prefix("0o") {
            i64::from_str_radix(oct, 8).ok()
        } else if lower.len() > 1
            && lower.starts_with('0')
            && lower.bytes().all(|b| b.is_ascii_digit())
        {
            i64::from_str_radix(&lower[1..], 8).ok()
        } else if lower.bytes().all(|b| b.is_ascii_digit()) {
            lower.parse::<i64>().ok()
        } else {
            None
        };

        if let Some(int) = int {
            return Ok(PhpValue::Int(if negative { -int } else { int }));
        }
        match lower.parse::<f64>() {
            Ok(float) if float.is_finite() => {
                Ok(PhpValue::Float(if negative { -float } else { float }))
            }
            _ => Err(self.error_at(token, format!("invalid number literal '{}'", text))),
        }
    }

    fn name(&mut self) -> Result<String, PhpParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Name(name) => Ok(name),
            _ => Err(self.error_at(&token, "expected a name")),
        }
    }

    fn expect_statement_end(&mut self) -> Result<(), PhpParseError> {
        // A close tag also terminates a statement.
        if self.peek().kind == TokenKind::CloseTag {
            return Ok(());
        }
        self.expect(TokenKind::Semicolon, "';'")
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), PhpParseError> {
        if self.eat(&kind) {
            Ok(())
        } else {
            let token = self.peek().clone();
            let message = format!("expected {}, found {}", expected, describe(&token.kind));
            Err(self.error_at(&token, message))
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let found = matches!(
            &self.peek().kind,
            TokenKind::Name(name) if name.eq_ignore_ascii_case(keyword)
        );
        if found {
            self.advance();
        }
        found
    }

    fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    fn previous(&self) -> Token {
        self.tokens[self.pos.saturating_sub(1)].clone()
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn unexpected(&self, token: &Token) -> PhpParseError {
        self.error_at(token, format!("unexpected {}", describe(&token.kind)))
    }

    fn error_at<S: Into<String>>(&self, token: &Token, message: S) -> PhpParseError {
        PhpParseError::new(token.line, token.column, message)
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::OpenTag => "'<?php'".to_string(),
        TokenKind::CloseTag => "'?>'".to_string(),
        TokenKind::Name(name) => format!("'{}'", name),
        TokenKind::String(_) => "string literal".to_string(),
        TokenKind::Number(text) => format!("number '{}'", text),
        TokenKind::LBracket => "'['".to_string(),
        TokenKind::RBracket => "']'".to_string(),
        TokenKind::LParen => "'('".to_string(),
        TokenKind::RParen => "')'".to_string(),
        TokenKind::LBrace => "'{'".to_string(),
        TokenKind::RBrace => "'}'".to_string(),
        TokenKind::Comma => "','".to_string(),
        TokenKind::Semicolon => "';'".to_string(),
        TokenKind::DoubleArrow => "'=>'".to_string(),
        TokenKind::DoubleColon => "'::'".to_string(),
        TokenKind::Equals => "'='".to_string(),
        TokenKind::Minus => "'-'".to_string(),
        TokenKind::Plus => "'+'".to_string(),
        TokenKind::Backslash => "'\\'".to_string(),
        TokenKind::Eof => "end of file".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_array(source: &str) -> PhpArray {
        match parse_config(source).unwrap() {
            PhpValue::Array(array) => array,
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn reads_generated_factories_file() {
        let source = r#"<?php
/**
 * This file generated by factory-injector.
 */

return [
    'dependencies' => [
        'factories' => [
            App\Handler\PingHandler::class => App\Handler\PingFactory::class,
        ],
    ],
];
"#;
        let array = parse_array(source);
        let factories = array
            .get("dependencies")
            .and_then(PhpValue::as_array)
            .and_then(|deps| deps.get("factories"))
            .and_then(PhpValue::as_array)
            .unwrap();

        let entries: Vec<_> = factories.iter().cloned().collect();
        assert_eq!(
            entries,
            vec![(
                ArrayKey::String("App\\Handler\\PingHandler".into()),
                PhpValue::Class("App\\Handler\\PingFactory".into())
            )]
        );
    }

    #[test]
    fn resolves_imports_and_namespace() {
        let source = r#"<?php
declare(strict_types=1);

namespace App;

use Laminas\Diactoros\{Response, ServerRequest as Request};
use function sprintf;
use Other\Thing;

return [
    Handler\Ping::class => Thing::class,
    Response::class => Request::class,
    \Absolute\Name::class => namespace\Local::class,
];
"#;
        let array = parse_array(source);
        let entries: Vec<_> = array.iter().cloned().collect();
        assert_eq!(
            entries,
            vec![
                (
                    ArrayKey::String("App\\Handler\\Ping".into()),
                    PhpValue::Class("Other\\Thing".into())
                ),
                (
                    ArrayKey::String("Laminas\\Diactoros\\Response".into()),
                    PhpValue::Class("Laminas\\Diactoros\\ServerRequest".into())
                ),
                (ArrayKey::String("Absolute\\Name".into()), PhpValue::Class("App\\Local".into())),
            ]
        );
    }

    #[test]
    fn reads_scalars_and_long_arrays() {
        let array = parse_array(concat!(
            "<?php return array('a' => true, 'b' => NULL, 'c' => -0x10,",
            " 'd' => 1.5, 'e' => DEBUG, 7, 'x');",
        ));
        assert_eq!(array.get("a"), Some(&PhpValue::Bool(true)));
        assert_eq!(array.get("b"), Some(&PhpValue::Null));
        assert_eq!(array.get("c"), Some(&PhpValue::Int(-16)));
        assert_eq!(array.get("d"), Some(&PhpValue::Float(1.5)));
        assert_eq!(array.get("e"), Some(&PhpValue::Constant("DEBUG".into())));
        assert_eq!(array.get("0"), Some(&PhpValue::Int(7)));
        assert_eq!(array.get("1"), Some(&PhpValue::String("x".into())));
    }

    #[test]
    fn later_duplicate_keys_win() {
        let array = parse_array("<?php return ['a' => 1, 'a' => 2];");
        assert_eq!(array.len(), 1);
        assert_eq!(array.get("a"), Some(&PhpValue::Int(2)));
    }

    #[test]
    fn empty_array_and_close_tag() {
        let array = parse_array("<?php return [] ?>");
        assert!(array.is_empty());
    }

    #[test]
    fn missing_return_is_an_error() {
        let err = parse_config("<?php\n// nothing here\n").unwrap_err();
        assert!(err.message.contains("does not return"));
    }

    #[test]
    fn function_calls_are_rejected() {
        let err = parse_config("<?php return ['a' => getenv('X')];").unwrap_err();
        assert!(err.message.contains("getenv"));
    }

    #[test]
    fn statements_with_side_effects_are_rejected() {
        let err = parse_config("<?php echo 'hi'; return [];").unwrap_err();
        assert_eq!(err.message, "unsupported statement 'echo'");
    }

    #[test]
    fn self_class_is_rejected() {
        let err = parse_config("<?php return [self::class => 'x'];").unwrap_err();
        assert!(err.message.contains("self::class"));
    }

    #[test]
    fn other_class_constants_are_rejected() {
        let err = parse_config("<?php return [Foo::BAR];").unwrap_err();
        assert!(err.message.contains("::class"));
    }

    #[test]
    fn missing_comma_reports_position() {
        let err = parse_config("<?php\nreturn [\n  'a' => 1\n  'b' => 2,\n];").unwrap_err();
        assert_eq!((err.line, err.column), (4, 3));
        assert!(err.message.starts_with("expected ',' or end of array"));
    }

    #[test]
    fn array_keys_cannot_be_arrays() {
        let err = parse_config("<?php return [[] => 1];").unwrap_err();
        assert!(err.message.contains("array cannot be used as an array key"));
    }
}
