//! Tokenizer for the Gradle Kotlin DSL subset.

use crate::error::{DroidspecError, Result};
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    Int(i64),
    Str(String),
    LBrace,
    RBrace,
    LParen,
    RParen,
    Comma,
    Dot,
    Eq,
    PlusEq,
    Minus,
    Semicolon,
}

impl TokenKind {
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("identifier `{}`", name),
            TokenKind::Int(value) => format!("number `{}`", value),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::LBrace => "`{`".to_string(),
            TokenKind::RBrace => "`}`".to_string(),
            TokenKind::LParen => "`(`".to_string(),
            TokenKind::RParen => "`)`".to_string(),
            TokenKind::Comma => "`,`".to_string(),
            TokenKind::Dot => "`.`".to_string(),
            TokenKind::Eq => "`=`".to_string(),
            TokenKind::PlusEq => "`+=`".to_string(),
            TokenKind::Minus => "`-`".to_string(),
            TokenKind::Semicolon => "`;`".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

/// Split `source` into tokens. Comments and whitespace are dropped.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer {
        chars: source.chars().peekable(),
        line: 1,
        column: 1,
    };
    let mut tokens = Vec::new();

    while let Some(&c) = lexer.chars.peek() {
        let (line, column) = (lexer.line, lexer.column);
        let kind = match c {
            c if c.is_whitespace() => {
                lexer.bump();
                continue;
            }
            '/' => {
                lexer.bump();
                match lexer.chars.peek() {
                    Some('/') => {
                        lexer.skip_line_comment();
                        continue;
                    }
                    Some('*') => {
                        lexer.bump();
                        lexer.skip_block_comment(line, column)?;
                        continue;
                    }
                    _ => return Err(syntax(line, column, "unexpected character `/`")),
                }
            }
            '"' => lexer.string(line, column)?,
            c if c.is_ascii_digit() => lexer.number(line, column)?,
            c if c.is_alphabetic() || c == '_' => lexer.ident(),
            '+' => {
                lexer.bump();
                if lexer.chars.peek() == Some(&'=') {
                    lexer.bump();
                    TokenKind::PlusEq
                } else {
                    return Err(syntax(line, column, "unexpected character `+`"));
                }
            }
            _ => {
                lexer.bump();
                match c {
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    ',' => TokenKind::Comma,
                    '.' => TokenKind::Dot,
                    '=' => TokenKind::Eq,
                    '-' => TokenKind::Minus,
                    ';' => TokenKind::Semicolon,
                    other => {
                        return Err(syntax(
                            line,
                            column,
                            format!("unexpected character `{}`", other),
                        ));
                    }
                }
            }
        };
        tokens.push(Token { kind, line, column });
    }

    Ok(tokens)
}

impl Lexer<'_> {
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_line_comment(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    // Kotlin block comments nest.
    fn skip_block_comment(&mut self, line: usize, column: usize) -> Result<()> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.bump() {
                Some('/') if self.chars.peek() == Some(&'*') => {
                    self.bump();
                    depth += 1;
                }
                Some('*') if self.chars.peek() == Some(&'/') => {
                    self.bump();
                    depth -= 1;
                }
                Some(_) => {}
                None => return Err(syntax(line, column, "unterminated block comment")),
            }
        }
        Ok(())
    }

    fn string(&mut self, line: usize, column: usize) -> Result<TokenKind> {
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(TokenKind::Str(value)),
                Some('\\') => {
                    let escaped = match self.bump() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some(c @ ('"' | '\\' | '$' | '\'')) => c,
                        Some(other) => {
                            return Err(syntax(
                                self.line,
                                self.column.saturating_sub(1),
                                format!("unsupported escape `\\{}`", other),
                            ));
                        }
                        None => break,
                    };
                    value.push(escaped);
                }
                Some('\n') | None => break,
                Some(c) => value.push(c),
            }
        }
        Err(syntax(line, column, "unterminated string literal"))
    }

    fn number(&mut self, line: usize, column: usize) -> Result<TokenKind> {
        let mut digits = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if c != '_' {
                break;
            }
            self.bump();
        }
        if matches!(self.chars.peek(), Some('L' | 'l')) {
            self.bump();
        }
        digits
            .parse::<i64>()
            .map(TokenKind::Int)
            .map_err(|_| syntax(line, column, format!("integer literal `{}` is out of range", digits)))
    }

    fn ident(&mut self) -> TokenKind {
        let mut name = String::new();
        while let Some(&c) = self.chars.peek() {
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            name.push(c);
            self.bump();
        }
        TokenKind::Ident(name)
    }
}

fn syntax(line: usize, column: usize, message: impl Into<String>) -> DroidspecError {
    DroidspecError::Syntax {
        line,
        column,
        message: message.into(),
    }
}
