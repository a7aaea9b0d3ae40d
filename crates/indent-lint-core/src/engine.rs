//! The depth-first traversal engine.
//!
//! Walks one externally supplied syntax tree, mirroring the current
//! root-to-node path in an explicit handler stack. Each node gets exactly
//! one handler, constructed on enter from its parent's suggested level,
//! checked immediately, and discarded on exit, so memory is bounded by
//! tree depth rather than tree size.

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::config::IndentationConfig;
use crate::handler::{CheckContext, NodeHandler, RootHandler};
use crate::lines::LineCache;
use crate::registry::HandlerRegistry;
use crate::token::TokenProvider;
use crate::tree::{NodeKind, SyntaxNode};
use crate::types::{LintResult, Location, Violation, ViolationSink};

/// Fatal traversal errors.
///
/// Style violations are never errors; these abort the session, and the
/// partial violation list must not be trusted as complete.
#[derive(Debug, Error, Diagnostic)]
pub enum CheckError {
    /// A node kind without a registered handler was encountered. This is
    /// a coverage bug in the registry, not a defect in the checked file.
    #[error("no handler registered for node kind `{kind}` at {location}")]
    UnhandledKind {
        /// The unregistered kind.
        kind: NodeKind,
        /// Where the node starts.
        location: Location,
    },

    /// A node event arrived outside an active tree traversal.
    #[error("node event received outside of an active tree traversal")]
    NotTraversing,
}

/// One indentation-checking session over one syntax tree.
///
/// The session is single-threaded and synchronous; the handler stack and
/// the violation sink are owned exclusively by it. Use [`run`](Self::run)
/// to drive a whole tree, or feed `begin_tree` / `enter_node` /
/// `exit_node` / `end_tree` events from an external walker.
pub struct IndentationCheck<'t, 's> {
    registry: &'s HandlerRegistry,
    ctx: CheckContext<'s>,
    stack: Vec<Box<dyn NodeHandler + 't>>,
    sink: ViolationSink,
    nodes_visited: usize,
}

impl<'t, 's> IndentationCheck<'t, 's> {
    /// Creates a session over the given registry and collaborators.
    #[must_use]
    pub fn new(
        registry: &'s HandlerRegistry,
        config: &'s IndentationConfig,
        tokens: &'s dyn TokenProvider,
        lines: &'s dyn LineCache,
    ) -> Self {
        Self {
            registry,
            ctx: CheckContext::new(config, tokens, lines),
            stack: Vec::new(),
            sink: ViolationSink::new(),
            nodes_visited: 0,
        }
    }

    /// Runs one full depth-first traversal from `root` and returns the
    /// ordered violations.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::UnhandledKind`] and aborts the walk when a
    /// node kind has no registered handler.
    pub fn run(mut self, root: &'t SyntaxNode) -> Result<LintResult, CheckError> {
        self.begin_tree();
        self.walk(root)?;
        self.end_tree();
        Ok(self.finish())
    }

    /// Starts a traversal by pushing the root handler.
    pub fn begin_tree(&mut self) {
        debug!("begin tree");
        debug_assert!(self.stack.is_empty(), "begin_tree on an active session");
        self.stack.push(Box::new(RootHandler::new()));
    }

    /// Handles a node-enter event: resolves the handler constructor,
    /// derives the node's level from the stack top, pushes the handler,
    /// and runs its check.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::UnhandledKind`] for an unregistered kind and
    /// [`CheckError::NotTraversing`] when no tree has been begun.
    pub fn enter_node(&mut self, node: &'t SyntaxNode) -> Result<(), CheckError> {
        let Some(parent) = self.stack.last() else {
            return Err(CheckError::NotTraversing);
        };
        let Some(ctor) = self.registry.constructor_for(node.kind) else {
            return Err(CheckError::UnhandledKind {
                kind: node.kind,
                location: Location::of(&node.extent),
            });
        };

        let level = parent.suggested_child_level(self.ctx.config);
        debug!(
            kind = %node.kind,
            line = node.extent.start.line,
            level = %level,
            depth = self.stack.len(),
            "entering node"
        );

        self.stack.push(ctor(node, level));
        self.nodes_visited += 1;
        if let Some(handler) = self.stack.last() {
            handler.check_indentation(&self.ctx, &mut self.sink);
        }
        Ok(())
    }

    /// Handles a node-exit event: pops and discards the node's handler.
    pub fn exit_node(&mut self, node: &'t SyntaxNode) {
        debug!(kind = %node.kind, "exiting node");
        debug_assert!(self.stack.len() > 1, "exit_node without matching enter");
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Ends the traversal; only the root handler may remain on the stack.
    pub fn end_tree(&mut self) {
        debug_assert_eq!(
            self.stack.len(),
            1,
            "all node handlers must be popped before tree end"
        );
        self.stack.clear();
        debug!("end tree");
    }

    /// The violations recorded so far, for incremental consumers.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        self.sink.violations()
    }

    /// Consumes the session, yielding the result.
    #[must_use]
    pub fn finish(self) -> LintResult {
        LintResult {
            violations: self.sink.into_violations(),
            nodes_visited: self.nodes_visited,
        }
    }

    fn walk(&mut self, node: &'t SyntaxNode) -> Result<(), CheckError> {
        self.enter_node(node)?;
        for child in &node.children {
            self.walk(child)?;
        }
        self.exit_node(node);
        Ok(())
    }
}
