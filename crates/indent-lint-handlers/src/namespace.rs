//! Handler for namespace definitions.

use indent_lint_core::{
    check_curly_braces, CheckContext, HandlerBase, IndentLevel, IndentationConfig, NodeHandler,
    SyntaxNode, ViolationSink,
};

/// Checks brace placement of a namespace body.
///
/// Nested declarations stay on the namespace's own level unless
/// `indent_declarations_within_namespace_definition` is set; the common
/// C++ convention keeps namespace contents flush left.
pub struct NamespaceHandler<'t> {
    base: HandlerBase<'t>,
}

impl NamespaceHandler<'_> {
    /// Handler constructor for the dispatch registry.
    #[must_use]
    pub fn construct<'t>(node: &'t SyntaxNode, level: IndentLevel) -> Box<dyn NodeHandler + 't> {
        Box::new(NamespaceHandler {
            base: HandlerBase::new(node, level),
        })
    }
}

impl NodeHandler for NamespaceHandler<'_> {
    fn level(&self) -> &IndentLevel {
        self.base.level()
    }

    fn should_increase_indent(&self, config: &IndentationConfig) -> bool {
        config.indent_declarations_within_namespace_definition
    }

    fn check_indentation(&self, ctx: &CheckContext<'_>, sink: &mut ViolationSink) {
        check_curly_braces(
            &self.base,
            ctx.config.brace_positions_namespace_declaration,
            ctx,
            sink,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indent_lint_core::{NodeKind, SourceExtent, SourcePos};

    #[test]
    fn namespace_contents_are_flush_by_default() {
        let node = SyntaxNode::new(
            NodeKind::Namespace,
            SourceExtent::new("a.cpp", SourcePos::new(1, 1), SourcePos::new(9, 1)),
        );
        let handler = NamespaceHandler::construct(&node, IndentLevel::singleton(0));

        let mut config = IndentationConfig::default();
        assert!(!handler.should_increase_indent(&config));
        assert!(handler.suggested_child_level(&config).accepts(0));

        config.indent_declarations_within_namespace_definition = true;
        assert!(handler.suggested_child_level(&config).accepts(4));
    }
}
