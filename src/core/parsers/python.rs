use anyhow::{Result, anyhow};
use tree_sitter::{Node, Parser};

use super::ast::{
    Argument, Attribute, Call, Constant, ConstantValue, Expr, Keyword, Module, Name, Other,
    Position, Span,
};
use super::literal::{LiteralKind, decode_string_literal};

/// A file that tree-sitter could not parse cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// Position of the first `ERROR` or `MISSING` node.
    pub position: Position,
    pub message: String,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.message, self.position.line, self.position.column
        )
    }
}

impl std::error::Error for ParseFailure {}

/// Python source parser backed by tree-sitter-python.
///
/// One parser is reused for every file of a scan.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| anyhow!("Failed to initialize Python grammar: {}", e))?;
        Ok(Self { parser })
    }

    /// Parse Python source and lower it into a [`Module`].
    ///
    /// tree-sitter recovers from syntax errors, but a tree with recovered
    /// regions would silently lose calls, so any error node fails the file.
    pub fn parse(&mut self, source: &str) -> std::result::Result<Module, ParseFailure> {
        let tree = self.parser.parse(source, None).ok_or_else(|| ParseFailure {
            position: Position::new(1, 0),
            message: "Failed to parse Python source".to_string(),
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let (position, message) = match first_error(root) {
                Some(node) if node.is_missing() => (
                    position_of(node),
                    format!("Syntax error: missing '{}'", node.kind()),
                ),
                Some(node) => (position_of(node), "Syntax error".to_string()),
                None => (position_of(root), "Syntax error".to_string()),
            };
            return Err(ParseFailure { position, message });
        }

        let lowering = Lowering { source };
        Ok(Module {
            body: lowering.children(root),
        })
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(first_error)
}

fn position_of(node: Node<'_>) -> Position {
    let point = node.start_position();
    Position::new(point.row + 1, point.column)
}

fn span_of(node: Node<'_>) -> Span {
    Span {
        start: position_of(node),
        bytes: node.byte_range(),
    }
}

/// Converts tree-sitter nodes into [`Expr`] values.
struct Lowering<'s> {
    source: &'s str,
}

impl<'s> Lowering<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    /// Named, non-comment children of `node`.
    fn significant_children<'t>(&self, node: Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| !child.is_extra())
            .collect()
    }

    fn children(&self, node: Node<'_>) -> Vec<Expr> {
        self.significant_children(node)
            .into_iter()
            .map(|child| self.lower(child))
            .collect()
    }

    fn lower(&self, node: Node<'_>) -> Expr {
        match node.kind() {
            "identifier" => Expr::Name(Name {
                span: span_of(node),
                id: self.text(node).to_string(),
            }),
            "string" => self.lower_string(node),
            "concatenated_string" => self.lower_concatenated_string(node),
            "integer" | "float" => {
                let text = self.text(node);
                let value = if text.ends_with(['j', 'J']) {
                    ConstantValue::Complex
                } else if node.kind() == "integer" {
                    ConstantValue::Int
                } else {
                    ConstantValue::Float
                };
                self.constant(node, value)
            }
            "true" | "false" => self.constant(node, ConstantValue::Bool),
            "none" => self.constant(node, ConstantValue::None),
            "ellipsis" => self.constant(node, ConstantValue::Ellipsis),
            "parenthesized_expression" => match self.significant_children(node).as_slice() {
                [inner] => self.lower(*inner),
                _ => self.other(node),
            },
            "call" => self.lower_call(node),
            "attribute" => match (
                node.child_by_field_name("object"),
                node.child_by_field_name("attribute"),
            ) {
                (Some(object), Some(attribute)) => Expr::Attribute(Attribute {
                    span: span_of(node),
                    value: Box::new(self.lower(object)),
                    attr: self.text(attribute).to_string(),
                }),
                _ => self.other(node),
            },
            _ => self.other(node),
        }
    }

    fn constant(&self, node: Node<'_>, value: ConstantValue) -> Expr {
        Expr::Constant(Constant {
            span: span_of(node),
            value,
        })
    }

    fn other(&self, node: Node<'_>) -> Expr {
        Expr::Other(Other {
            span: span_of(node),
            kind: node.kind().to_string(),
            children: self.children(node),
        })
    }

    fn lower_string(&self, node: Node<'_>) -> Expr {
        match decode_string_literal(self.text(node)) {
            Some(literal) if literal.kind == LiteralKind::Str => {
                self.constant(node, ConstantValue::Str(literal.value))
            }
            Some(literal) if literal.kind == LiteralKind::Bytes => {
                self.constant(node, ConstantValue::Bytes)
            }
            // f-strings are not constants, but their interpolations may hold calls.
            _ => self.other(node),
        }
    }

    /// `"a" "b"` is a single constant `"ab"` at runtime.
    fn lower_concatenated_string(&self, node: Node<'_>) -> Expr {
        let parts: Vec<Expr> = self
            .significant_children(node)
            .into_iter()
            .map(|child| self.lower(child))
            .collect();

        let all_str = parts
            .iter()
            .all(|part| matches!(part, Expr::Constant(c) if matches!(c.value, ConstantValue::Str(_))));
        if all_str {
            let joined = parts
                .iter()
                .filter_map(|part| match part {
                    Expr::Constant(Constant {
                        value: ConstantValue::Str(value),
                        ..
                    }) => Some(value.as_str()),
                    _ => None,
                })
                .collect::<String>();
            return self.constant(node, ConstantValue::Str(joined));
        }

        let all_bytes = parts
            .iter()
            .all(|part| matches!(part, Expr::Constant(c) if c.value == ConstantValue::Bytes));
        if all_bytes {
            return self.constant(node, ConstantValue::Bytes);
        }

        Expr::Other(Other {
            span: span_of(node),
            kind: node.kind().to_string(),
            children: parts,
        })
    }

    fn lower_call(&self, node: Node<'_>) -> Expr {
        let Some(function) = node.child_by_field_name("function") else {
            return self.other(node);
        };

        let mut args = Vec::new();
        let mut keywords = Vec::new();

        if let Some(arguments) = node.child_by_field_name("arguments") {
            if arguments.kind() == "generator_expression" {
                args.push(Argument::Positional(self.lower(arguments)));
            } else {
                for child in self.significant_children(arguments) {
                    match child.kind() {
                        "keyword_argument" => {
                            let name = child
                                .child_by_field_name("name")
                                .map(|name| self.text(name).to_string());
                            let value = match child.child_by_field_name("value") {
                                Some(value) => self.lower(value),
                                None => self.other(child),
                            };
                            keywords.push(Keyword { name, value });
                        }
                        "list_splat" | "parenthesized_list_splat" => {
                            args.push(Argument::Starred(self.unwrap_splat(child)));
                        }
                        "dictionary_splat" => keywords.push(Keyword {
                            name: None,
                            value: self.unwrap_splat(child),
                        }),
                        _ => args.push(Argument::Positional(self.lower(child))),
                    }
                }
            }
        }

        Expr::Call(Call {
            span: span_of(node),
            func: Box::new(self.lower(function)),
            args,
            keywords,
        })
    }

    fn unwrap_splat(&self, node: Node<'_>) -> Expr {
        match self.significant_children(node).as_slice() {
            [inner] => self.lower(*inner),
            _ => self.other(node),
        }
    }
}
