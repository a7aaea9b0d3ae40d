//! Handler for switch statements.

use indent_lint_core::{
    HandlerBase, IndentLevel, IndentationConfig, NodeHandler, SyntaxNode,
};

/// Indents case labels within a switch body when configured to.
///
/// Gated by `indent_statements_within_switch_body`, which is off in the
/// K&R profile (case labels align with the `switch` keyword).
pub struct SwitchBodyHandler<'t> {
    base: HandlerBase<'t>,
}

impl SwitchBodyHandler<'_> {
    /// Handler constructor for the dispatch registry.
    #[must_use]
    pub fn construct<'t>(node: &'t SyntaxNode, level: IndentLevel) -> Box<dyn NodeHandler + 't> {
        Box::new(SwitchBodyHandler {
            base: HandlerBase::new(node, level),
        })
    }
}

impl NodeHandler for SwitchBodyHandler<'_> {
    fn level(&self) -> &IndentLevel {
        self.base.level()
    }

    fn should_increase_indent(&self, config: &IndentationConfig) -> bool {
        config.indent_statements_within_switch_body
    }
}
