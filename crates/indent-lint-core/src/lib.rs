//! # indent-lint-core
//!
//! Core framework for indentation checking over externally parsed syntax
//! trees.
//!
//! This crate provides the pieces the per-kind handler catalogue is built
//! from:
//!
//! - [`IndentLevel`] for the set of columns accepted at one tree position
//! - [`NodeHandler`] for the per-node checking obligation
//! - [`HandlerRegistry`] for the closed kind-to-constructor dispatch table
//! - [`IndentationCheck`] for the depth-first traversal engine
//! - [`Violation`] and [`ViolationSink`] for ordered diagnostics
//! - [`IndentationConfig`] for the validated policy schema
//!
//! Parsing, tokenizing, and file reading stay outside: callers supply a
//! [`SyntaxNode`] tree plus [`TokenProvider`] and [`LineCache`]
//! implementations.
//!
//! ## Example
//!
//! ```ignore
//! use indent_lint_core::{IndentationCheck, IndentationConfig};
//!
//! let check = IndentationCheck::new(&registry, &config, &tokens, &lines);
//! let result = check.run(&root)?;
//! for violation in &result.violations {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod column;
mod config;
mod engine;
mod handler;
mod level;
mod lines;
mod registry;
mod token;
mod tree;
mod types;

pub use column::expanded_column;
pub use config::{BraceStyle, ConfigError, IndentationConfig, TabPolicy};
pub use engine::{CheckError, IndentationCheck};
pub use handler::{check_curly_braces, CheckContext, HandlerBase, NodeHandler, RootHandler};
pub use level::IndentLevel;
pub use lines::{LineCache, MemoryLines};
pub use registry::{HandlerCtor, HandlerRegistry, HandlerRegistryBuilder, RegistryError};
pub use token::{token_extent, Token, TokenIndex, TokenKind, TokenProvider, TokenWindow};
pub use tree::{NodeKind, SourceExtent, SourcePos, SyntaxNode};
pub use types::{LintResult, Location, RuleKind, Violation, ViolationSink};
