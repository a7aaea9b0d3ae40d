//! # indent-lint
//!
//! Indentation-rule engine for a C/C++ style checker.
//!
//! Given a syntax tree produced by an external parser, the engine
//! verifies that every declaration, statement, and brace pair sits at a
//! column consistent with a configurable indentation policy, and reports
//! violations in source order.
//!
//! This facade crate wires the framework ([`indent_lint_core`]) to the
//! built-in handler catalogue ([`indent_lint_handlers`]) behind a single
//! entry point:
//!
//! ```ignore
//! use indent_lint::{check_tree, IndentationConfig, MemoryLines, TokenIndex};
//!
//! let config = IndentationConfig::parse(r#"brace_positions_namespace_declaration = "next-line""#)?;
//! let result = check_tree(&root, &tokens, &lines, &config)?;
//! for violation in &result.violations {
//!     eprintln!("{violation}");
//! }
//! ```
//!
//! Parsing source text, tokenizing, reading files, and rendering reports
//! belong to the caller; the engine only interprets positions that the
//! parser already resolved.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;

pub use check::{check_tree, check_tree_with_registry};

pub use indent_lint_core::{
    expanded_column, BraceStyle, CheckError, ConfigError, HandlerRegistry, IndentLevel,
    IndentationCheck, IndentationConfig, LineCache, LintResult, Location, MemoryLines,
    NodeHandler, NodeKind, RuleKind, SourceExtent, SourcePos, SyntaxNode, TabPolicy, Token,
    TokenIndex, TokenKind, TokenProvider, Violation, ViolationSink,
};
pub use indent_lint_handlers::default_registry;
