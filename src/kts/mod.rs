//! Gradle Kotlin DSL (`build.gradle.kts`) support.
//!
//! Covers the declarative subset module build files are written in:
//! assignments, nested configuration blocks, function calls with optional
//! trailing blocks, and comments. Scripts are parsed into a small syntax
//! tree, then lowered into the raw build document.

pub mod ast;
pub mod lexer;
mod lower;
pub mod parser;
mod render;

#[cfg(test)]
mod tests;

pub(crate) use lower::lower;
pub use render::render;

use crate::error::Result;
use ast::Statement;

/// Parse a Kotlin DSL script into statements.
pub fn parse(source: &str) -> Result<Vec<Statement>> {
    let tokens = lexer::tokenize(source)?;
    parser::Parser::new(tokens).parse_script()
}
