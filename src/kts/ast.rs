//! Syntax tree for the Gradle Kotlin DSL subset.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// `a.b = value` or `a += value`.
    Assign {
        target: Vec<String>,
        value: Expr,
        append: bool,
    },
    /// `name { ... }`
    Block { name: String, body: Vec<Statement> },
    /// `name(args) { ... } infix value`
    Call {
        call: Call,
        body: Option<Vec<Statement>>,
        infix: Vec<(String, Expr)>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Dotted callee, e.g. `getByName` or `project.file`.
    pub name: String,
    pub args: Vec<Arg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub name: Option<String>,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Str(String),
    Int(i64),
    Bool(bool),
    Path(Vec<String>),
    Call(Call),
}

impl Expr {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Str(_) => "a string",
            Expr::Int(_) => "an integer",
            Expr::Bool(_) => "a boolean",
            Expr::Path(_) => "a reference",
            Expr::Call(_) => "a function call",
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Str(value) => write!(f, "{:?}", value),
            Expr::Int(value) => write!(f, "{}", value),
            Expr::Bool(value) => write!(f, "{}", value),
            Expr::Path(segments) => f.write_str(&segments.join(".")),
            Expr::Call(call) => write!(f, "{}", call),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if let Some(name) = &arg.name {
                write!(f, "{} = ", name)?;
            }
            write!(f, "{}", arg.value)?;
        }
        f.write_str(")")
    }
}
