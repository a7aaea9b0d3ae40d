//! The registered no-op handler.

use indent_lint_core::{HandlerBase, IndentLevel, NodeHandler, SyntaxNode};

/// Handler for kinds with no direct indentation obligation.
///
/// Most syntactic categories (expressions, references, literals, plain
/// statements) carry no position rule of their own; their correctness is
/// inherited transitively through the checks of their enclosing
/// declarations. They still get a handler so the dispatch table stays
/// total and levels keep propagating to their children.
pub struct PassHandler<'t> {
    base: HandlerBase<'t>,
}

impl PassHandler<'_> {
    /// Handler constructor for the dispatch registry.
    #[must_use]
    pub fn construct<'t>(node: &'t SyntaxNode, level: IndentLevel) -> Box<dyn NodeHandler + 't> {
        Box::new(PassHandler {
            base: HandlerBase::new(node, level),
        })
    }
}

impl NodeHandler for PassHandler<'_> {
    fn level(&self) -> &IndentLevel {
        self.base.level()
    }
}
