//! The node-kind dispatcher.
//!
//! Maps each [`NodeKind`] to the constructor of the handler that checks
//! that kind. The mapping is closed: it is built and validated once at
//! startup, so a kind without a constructor surfaces as a structural
//! error instead of a mid-walk name-resolution failure.

use std::collections::HashMap;

use miette::Diagnostic;
use thiserror::Error;

use crate::handler::NodeHandler;
use crate::level::IndentLevel;
use crate::tree::{NodeKind, SyntaxNode};

/// Constructor for the handler of one node kind.
///
/// Receives the node and the level suggested by the parent handler; the
/// returned handler's level is fixed from that point on.
pub type HandlerCtor =
    for<'t> fn(&'t SyntaxNode, IndentLevel) -> Box<dyn NodeHandler + 't>;

/// Errors raised while assembling a registry.
#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    /// One or more catalogue kinds have no registered constructor.
    #[error(
        "handler registry is missing constructors for: {}",
        .kinds.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(", ")
    )]
    MissingHandlers {
        /// The uncovered kinds.
        kinds: Vec<NodeKind>,
    },
}

/// The validated kind-to-constructor table.
#[derive(Debug)]
pub struct HandlerRegistry {
    handlers: HashMap<NodeKind, HandlerCtor>,
}

impl HandlerRegistry {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::new()
    }

    /// The constructor registered for `kind`, if any.
    #[must_use]
    pub fn constructor_for(&self, kind: NodeKind) -> Option<HandlerCtor> {
        self.handlers.get(&kind).copied()
    }

    /// Returns true iff `kind` has a registered constructor.
    #[must_use]
    pub fn covers(&self, kind: NodeKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

/// Builder for a [`HandlerRegistry`].
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    handlers: HashMap<NodeKind, HandlerCtor>,
}

impl HandlerRegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the constructor for `kind`, replacing a previous entry.
    #[must_use]
    pub fn register(mut self, kind: NodeKind, ctor: HandlerCtor) -> Self {
        self.handlers.insert(kind, ctor);
        self
    }

    /// Builds the registry, requiring full coverage of the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingHandlers`] listing every
    /// [`NodeKind`] without a constructor.
    pub fn build(self) -> Result<HandlerRegistry, RegistryError> {
        let kinds: Vec<NodeKind> = NodeKind::ALL
            .iter()
            .copied()
            .filter(|kind| !self.handlers.contains_key(kind))
            .collect();
        if kinds.is_empty() {
            Ok(HandlerRegistry {
                handlers: self.handlers,
            })
        } else {
            Err(RegistryError::MissingHandlers { kinds })
        }
    }

    /// Builds a deliberately partial registry.
    ///
    /// Encountering an unregistered kind mid-walk then aborts the session
    /// with a dispatch error, which is the intended behavior for callers
    /// that restrict checking to a kind subset.
    #[must_use]
    pub fn build_partial(self) -> HandlerRegistry {
        HandlerRegistry {
            handlers: self.handlers,
        }
    }
}
