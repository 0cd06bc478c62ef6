//! Translation call analyzer.
//!
//! Walks a lowered Python module, recognizes calls to the translation marker
//! (`_(ctx, "text")`), validates their shape and collects the literal texts.
//!
//! Accepted shapes for the text argument:
//!
//! ```python
//! _(ctx, "Hello")                       # literal form, located at the literal
//! _(tc, "Hello {name}".format(name=n))  # formatted form, located at the inner call
//! ```
//!
//! Anything else in the text position (variables, f-strings, arithmetic) is
//! dynamic and silently skipped.

use crate::core::ExtractedString;
use crate::core::parsers::ast::{Argument, Call, ConstantValue, Expr, Module, Position};
use crate::core::parsers::{ParseFailure, PythonParser};
use crate::issues::{Diagnostic, DiagnosticKind};

/// Required positional arity of a translation call: context and text.
pub const EXPECTED_ARGUMENT_COUNT: usize = 2;

/// What counts as a translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRules {
    /// Callee name of the translation function.
    pub marker: String,
    /// Accepted names for the first (context) argument.
    pub context_names: Vec<String>,
}

impl Default for TranslationRules {
    fn default() -> Self {
        Self {
            marker: "_".to_string(),
            context_names: vec!["ctx".to_string(), "tc".to_string()],
        }
    }
}

/// Result of analyzing a single file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileAnalysisResult {
    /// Valid call sites, in source order.
    pub strings: Vec<ExtractedString>,
    /// Malformed call sites, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Analyzer for one file.
///
/// # Usage
///
/// ```ignore
/// let module = parser.parse(&source)?;
/// let result = CallAnalyzer::new("bot/module.py", &source, &rules).analyze(&module);
/// ```
pub struct CallAnalyzer<'a> {
    /// Path to the file being analyzed (relative to the scan root).
    file_path: &'a str,
    /// File contents, for diagnostic source lines and offending expressions.
    source: &'a str,
    rules: &'a TranslationRules,

    strings: Vec<ExtractedString>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> CallAnalyzer<'a> {
    pub fn new(file_path: &'a str, source: &'a str, rules: &'a TranslationRules) -> Self {
        Self {
            file_path,
            source,
            rules,
            strings: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Main entry point: analyze a module and return results.
    pub fn analyze(mut self, module: &Module) -> FileAnalysisResult {
        for expr in &module.body {
            self.visit_expr(expr);
        }
        FileAnalysisResult {
            strings: self.strings,
            diagnostics: self.diagnostics,
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Constant(_) | Expr::Name(_) => {}
            Expr::Attribute(attribute) => self.visit_expr(&attribute.value),
            Expr::Call(call) => self.visit_call(call),
            Expr::Other(other) => {
                for child in &other.children {
                    self.visit_expr(child);
                }
            }
        }
    }

    /// Check the call itself, then descend into callee and arguments.
    ///
    /// The descent happens for every call, valid or not, so `_()` calls
    /// nested in arguments of other calls are always found.
    fn visit_call(&mut self, call: &Call) {
        if self.is_translation_call(call) {
            self.check_translation_call(call);
        }

        self.visit_expr(&call.func);
        for arg in &call.args {
            self.visit_expr(arg.expr());
        }
        for keyword in &call.keywords {
            self.visit_expr(&keyword.value);
        }
    }

    /// Direct, unqualified call of the marker: `_(...)`, not `i18n._(...)`.
    fn is_translation_call(&self, call: &Call) -> bool {
        matches!(&*call.func, Expr::Name(name) if name.id == self.rules.marker)
    }

    fn check_translation_call(&mut self, call: &Call) {
        let callee = call.func.position();

        let [context, text] = call.args.as_slice() else {
            self.add_diagnostic(
                callee,
                DiagnosticKind::BadArgumentCount {
                    expected: EXPECTED_ARGUMENT_COUNT,
                    got: call.args.len(),
                },
            );
            return;
        };

        if let Some(got) = self.invalid_context_name(context) {
            self.add_diagnostic(
                callee,
                DiagnosticKind::BadContextName {
                    accepted: self.rules.context_names.clone(),
                    got,
                },
            );
            return;
        }

        match text {
            // Literal form: `_(ctx, "text")`
            Argument::Positional(Expr::Constant(constant)) => match &constant.value {
                ConstantValue::Str(value) => self.add_string(constant.span.start, value),
                other => self.add_diagnostic(
                    callee,
                    DiagnosticKind::WrongLiteralType {
                        got: other.type_name().to_string(),
                    },
                ),
            },
            // Formatted form: `_(ctx, "text {}".format(x))`
            Argument::Positional(Expr::Call(formatted)) => {
                if let Expr::Attribute(method) = &*formatted.func
                    && let Expr::Constant(receiver) = &*method.value
                {
                    match &receiver.value {
                        ConstantValue::Str(value) => {
                            self.add_string(formatted.span.start, value)
                        }
                        other => self.add_diagnostic(
                            formatted.func.position(),
                            DiagnosticKind::WrongLiteralType {
                                got: other.type_name().to_string(),
                            },
                        ),
                    }
                }
            }
            // Dynamic text cannot be extracted and is not an error.
            _ => {}
        }
    }

    /// Returns the offending name (or expression text) if the context
    /// argument is not one of the accepted identifiers.
    fn invalid_context_name(&self, context: &Argument) -> Option<String> {
        match context {
            Argument::Positional(Expr::Name(name)) => {
                if self.rules.context_names.contains(&name.id) {
                    None
                } else {
                    Some(name.id.clone())
                }
            }
            Argument::Positional(expr) => Some(expr.span().text(self.source).to_string()),
            Argument::Starred(expr) => Some(format!("*{}", expr.span().text(self.source))),
        }
    }

    fn add_string(&mut self, position: Position, text: &str) {
        self.strings.push(ExtractedString::new(
            self.file_path,
            position.line,
            position.column,
            text,
        ));
    }

    fn add_diagnostic(&mut self, position: Position, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic {
            file: self.file_path.to_string(),
            line: position.line,
            column: position.column,
            kind,
            source_line: source_line(self.source, position.line),
        });
    }
}

/// Parse and analyze one file.
///
/// Syntax errors do not abort the scan: they are returned as a single
/// file-level diagnostic and the file contributes no strings.
pub fn analyze_source(
    parser: &mut PythonParser,
    file_path: &str,
    source: &str,
    rules: &TranslationRules,
) -> FileAnalysisResult {
    // Positions on the first line do not count a UTF-8 BOM.
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    match parser.parse(source) {
        Ok(module) => CallAnalyzer::new(file_path, source, rules).analyze(&module),
        Err(ParseFailure { position, message }) => FileAnalysisResult {
            strings: Vec::new(),
            diagnostics: vec![Diagnostic {
                file: file_path.to_string(),
                line: position.line,
                column: position.column,
                kind: DiagnosticKind::ParseError { message },
                source_line: source_line(source, position.line),
            }],
        },
    }
}

fn source_line(source: &str, line: usize) -> String {
    line.checked_sub(1)
        .and_then(|index| source.lines().nth(index))
        .unwrap_or_default()
        .to_string()
}
