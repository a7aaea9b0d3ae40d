//! # indent-lint-handlers
//!
//! Built-in node handlers for indent-lint.
//!
//! One handler type per checking behavior, mapped onto the node-kind
//! catalogue by [`default_registry`]:
//!
//! | Handler | Kinds | Behavior |
//! |---------|-------|----------|
//! | `ClassBodyHandler` | class/struct declarations and templates | brace check, optional member indent |
//! | `NamespaceHandler` | namespaces | brace check, optional declaration indent |
//! | `EnumBodyHandler` | enums | optional enumerator indent |
//! | `SwitchBodyHandler` | switch statements | optional body indent |
//! | `AlignedDeclHandler` | typedefs, member declarations | first-token alignment check |
//! | `PassHandler` | everything else | level propagation only |
//!
//! ## Usage
//!
//! ```ignore
//! use indent_lint_core::IndentationCheck;
//! use indent_lint_handlers::default_registry;
//!
//! let registry = default_registry();
//! let check = IndentationCheck::new(&registry, &config, &tokens, &lines);
//! let result = check.run(&root)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aligned_decl;
mod class_body;
mod enum_body;
mod namespace;
mod pass;
mod registry;
mod switch_body;

pub use aligned_decl::AlignedDeclHandler;
pub use class_body::ClassBodyHandler;
pub use enum_body::EnumBodyHandler;
pub use namespace::NamespaceHandler;
pub use pass::PassHandler;
pub use registry::{constructor_for, default_registry};
pub use switch_body::SwitchBodyHandler;

/// Re-export core types for convenience.
pub use indent_lint_core::{HandlerRegistry, NodeHandler, NodeKind, Violation};
