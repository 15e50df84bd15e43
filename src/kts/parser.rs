//! Recursive-descent parser for the Gradle Kotlin DSL subset.
//!
//! ```text
//! script    := statement*
//! statement := path ("=" | "+=") expr
//!            | IDENT block
//!            | call block? (IDENT expr)*      infix words stay on the call's line
//! call      := path "(" [arg ("," arg)* [","]] ")"
//! arg       := [IDENT "="] expr
//! expr      := STRING | ["-"] INT | "true" | "false" | call | path
//! ```

use super::ast::{Arg, Call, Expr, Statement, StatementKind};
use super::lexer::{Token, TokenKind};
use crate::error::{DroidspecError, Result};

/// Deepest allowed nesting of blocks and call arguments.
pub const MAX_NESTING: usize = 64;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    pub fn parse_script(mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            self.skip_semicolons();
            if self.peek().is_none() {
                return Ok(statements);
            }
            statements.push(self.statement()?);
        }
    }

    fn statement(&mut self) -> Result<Statement> {
        let (first, line, column) = self.expect_ident("a statement")?;

        if self.eat(&TokenKind::LBrace) {
            let body = self.block_body(line, column)?;
            return Ok(Statement {
                kind: StatementKind::Block { name: first, body },
                line,
                column,
            });
        }

        let path = self.path_tail(first)?;

        let kind = match self.peek_kind() {
            Some(TokenKind::Eq) | Some(TokenKind::PlusEq) => {
                let append = self.next_kind() == Some(TokenKind::PlusEq);
                let value = self.expr()?;
                StatementKind::Assign {
                    target: path,
                    value,
                    append,
                }
            }
            Some(TokenKind::LParen) => {
                self.advance();
                let call = Call {
                    name: path.join("."),
                    args: self.call_args()?,
                };
                let body = if self.eat(&TokenKind::LBrace) {
                    Some(self.block_body(line, column)?)
                } else {
                    None
                };
                let infix = self.infix_words()?;
                StatementKind::Call { call, body, infix }
            }
            _ => {
                return Err(self.unexpected(&format!(
                    "`=`, `(` or `{{` after `{}`",
                    path.join(".")
                )));
            }
        };

        Ok(Statement { kind, line, column })
    }

    /// Parse statements up to the closing brace. The opening brace is consumed.
    fn block_body(&mut self, line: usize, column: usize) -> Result<Vec<Statement>> {
        self.nested(line, column, |p| p.block_statements(line, column))
    }

    fn block_statements(&mut self, line: usize, column: usize) -> Result<Vec<Statement>> {
        let mut body = Vec::new();
        loop {
            self.skip_semicolons();
            match self.peek_kind() {
                Some(TokenKind::RBrace) => {
                    self.advance();
                    return Ok(body);
                }
                None => {
                    return Err(DroidspecError::Syntax {
                        line,
                        column,
                        message: "unclosed `{`".to_string(),
                    });
                }
                Some(_) => body.push(self.statement()?),
            }
        }
    }

    /// Collect `.ident` segments following `first`.
    fn path_tail(&mut self, first: String) -> Result<Vec<String>> {
        let mut path = vec![first];
        while self.eat(&TokenKind::Dot) {
            let (name, _, _) = self.expect_ident("an identifier after `.`")?;
            path.push(name);
        }
        Ok(path)
    }

    /// Parse arguments up to the closing parenthesis. The opening one is consumed.
    fn call_args(&mut self) -> Result<Vec<Arg>> {
        let (line, column) = self
            .previous()
            .map(|t| (t.line, t.column))
            .unwrap_or((1, 1));
        self.nested(line, column, Self::arg_list)
    }

    fn arg_list(&mut self) -> Result<Vec<Arg>> {
        let mut args = Vec::new();
        loop {
            if self.eat(&TokenKind::RParen) {
                return Ok(args);
            }

            let name = match (self.peek_kind(), self.peek_kind_at(1)) {
                (Some(TokenKind::Ident(name)), Some(TokenKind::Eq)) => {
                    let name = name.clone();
                    self.advance();
                    self.advance();
                    Some(name)
                }
                _ => None,
            };
            args.push(Arg {
                name,
                value: self.expr()?,
            });

            if !self.eat(&TokenKind::Comma) {
                self.expect(&TokenKind::RParen, "`,` or `)`")?;
                return Ok(args);
            }
        }
    }

    fn infix_words(&mut self) -> Result<Vec<(String, Expr)>> {
        let mut infix = Vec::new();
        loop {
            let same_line = match (self.previous(), self.peek()) {
                (Some(prev), Some(next)) => prev.line == next.line,
                _ => false,
            };
            if !same_line {
                return Ok(infix);
            }
            let Some(TokenKind::Ident(word)) = self.peek_kind().cloned() else {
                return Ok(infix);
            };
            self.advance();
            infix.push((word, self.expr()?));
        }
    }

    fn expr(&mut self) -> Result<Expr> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.unexpected("a value"));
        };

        match token.kind {
            TokenKind::Str(value) => {
                self.advance();
                Ok(Expr::Str(value))
            }
            TokenKind::Int(value) => {
                self.advance();
                Ok(Expr::Int(value))
            }
            TokenKind::Minus => {
                self.advance();
                match self.next_kind() {
                    Some(TokenKind::Int(value)) => Ok(Expr::Int(-value)),
                    _ => Err(DroidspecError::Syntax {
                        line: token.line,
                        column: token.column,
                        message: "expected a number after `-`".to_string(),
                    }),
                }
            }
            TokenKind::Ident(name) => {
                self.advance();
                match name.as_str() {
                    "true" => return Ok(Expr::Bool(true)),
                    "false" => return Ok(Expr::Bool(false)),
                    _ => {}
                }
                let path = self.path_tail(name)?;
                if self.eat(&TokenKind::LParen) {
                    Ok(Expr::Call(Call {
                        name: path.join("."),
                        args: self.call_args()?,
                    }))
                } else {
                    Ok(Expr::Path(path))
                }
            }
            _ => Err(self.unexpected("a value")),
        }
    }

    /// Run `parse` one nesting level deeper, failing past `MAX_NESTING`.
    fn nested<T>(
        &mut self,
        line: usize,
        column: usize,
        parse: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.depth >= MAX_NESTING {
            return Err(DroidspecError::Syntax {
                line,
                column,
                message: format!("nesting deeper than {} levels", MAX_NESTING),
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn skip_semicolons(&mut self) {
        while self.eat(&TokenKind::Semicolon) {}
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn peek_kind_at(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| &t.kind)
    }

    fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn next_kind(&mut self) -> Option<TokenKind> {
        self.advance().map(|t| t.kind)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consume an identifier, returning its name and position.
    fn expect_ident(&mut self, expected: &str) -> Result<(String, usize, usize)> {
        if let Some(Token {
            kind: TokenKind::Ident(name),
            line,
            column,
        }) = self.peek()
        {
            let ident = (name.clone(), *line, *column);
            self.pos += 1;
            return Ok(ident);
        }
        Err(self.unexpected(expected))
    }

    fn unexpected(&self, expected: &str) -> DroidspecError {
        match self.peek() {
            Some(token) => DroidspecError::Syntax {
                line: token.line,
                column: token.column,
                message: format!("expected {}, found {}", expected, token.kind.describe()),
            },
            None => {
                let (line, column) = self
                    .previous()
                    .map(|t| (t.line, t.column))
                    .unwrap_or((1, 1));
                DroidspecError::Syntax {
                    line,
                    column,
                    message: format!("expected {}, found end of input", expected),
                }
            }
        }
    }
}
