//! Lowered Python expression tree.
//!
//! tree-sitter produces a concrete syntax tree with dozens of node kinds. The
//! analyzer only cares about a handful of them, so the parser lowers the tree
//! into the closed [`Expr`] enum below. Everything that is not a constant, a
//! name, a call or an attribute access becomes [`Expr::Other`] and keeps its
//! children so that traversal can still reach nested calls.

use std::ops::Range;

/// Start position of a node.
///
/// `line` is 1-indexed, `column` is the 0-indexed UTF-8 byte offset in the
/// line, the same positions Python's `ast` module reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Source span of a node: start position plus byte range in the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub bytes: Range<usize>,
}

impl Span {
    /// Slice the node's source text out of the file contents.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.bytes.clone()).unwrap_or_default()
    }
}

/// Value of a constant expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Str(String),
    Bytes,
    Int,
    Float,
    Complex,
    Bool,
    None,
    Ellipsis,
}

impl ConstantValue {
    /// Python type name of the value, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConstantValue::Str(_) => "str",
            ConstantValue::Bytes => "bytes",
            ConstantValue::Int => "int",
            ConstantValue::Float => "float",
            ConstantValue::Complex => "complex",
            ConstantValue::Bool => "bool",
            ConstantValue::None => "NoneType",
            ConstantValue::Ellipsis => "ellipsis",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub span: Span,
    pub value: ConstantValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Name {
    pub span: Span,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub span: Span,
    pub value: Box<Expr>,
    pub attr: String,
}

/// A positional argument. Starred arguments (`*args`) still count towards
/// the positional arity.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Positional(Expr),
    Starred(Expr),
}

impl Argument {
    pub fn expr(&self) -> &Expr {
        match self {
            Argument::Positional(expr) | Argument::Starred(expr) => expr,
        }
    }
}

/// A keyword argument. `name` is `None` for `**kwargs` unpacking.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub name: Option<String>,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub span: Span,
    pub func: Box<Expr>,
    pub args: Vec<Argument>,
    pub keywords: Vec<Keyword>,
}

/// Any other node. `kind` is the tree-sitter node kind, kept for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct Other {
    pub span: Span,
    pub kind: String,
    pub children: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(Constant),
    Name(Name),
    Attribute(Attribute),
    Call(Call),
    Other(Other),
}

impl Expr {
    pub fn span(&self) -> &Span {
        match self {
            Expr::Constant(node) => &node.span,
            Expr::Name(node) => &node.span,
            Expr::Attribute(node) => &node.span,
            Expr::Call(node) => &node.span,
            Expr::Other(node) => &node.span,
        }
    }

    pub fn position(&self) -> Position {
        self.span().start
    }
}

/// A parsed source file: the module's top-level nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub body: Vec<Expr>,
}
