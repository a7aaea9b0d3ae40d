//! Handler for enum declarations.

use indent_lint_core::{
    HandlerBase, IndentLevel, IndentationConfig, NodeHandler, SyntaxNode,
};

/// Indents enumerators like class members.
///
/// Enum bodies share the class/struct nesting flag; the enumerators
/// themselves carry no direct check.
pub struct EnumBodyHandler<'t> {
    base: HandlerBase<'t>,
}

impl EnumBodyHandler<'_> {
    /// Handler constructor for the dispatch registry.
    #[must_use]
    pub fn construct<'t>(node: &'t SyntaxNode, level: IndentLevel) -> Box<dyn NodeHandler + 't> {
        Box::new(EnumBodyHandler {
            base: HandlerBase::new(node, level),
        })
    }
}

impl NodeHandler for EnumBodyHandler<'_> {
    fn level(&self) -> &IndentLevel {
        self.base.level()
    }

    fn should_increase_indent(&self, config: &IndentationConfig) -> bool {
        config.indent_inside_class_struct_body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indent_lint_core::{NodeKind, SourceExtent, SourcePos};

    #[test]
    fn enumerators_follow_the_class_body_flag() {
        let node = SyntaxNode::new(
            NodeKind::EnumDecl,
            SourceExtent::new("a.cpp", SourcePos::new(1, 1), SourcePos::new(4, 2)),
        );
        let handler = EnumBodyHandler::construct(&node, IndentLevel::singleton(4));

        let mut config = IndentationConfig::default();
        assert!(handler.suggested_child_level(&config).accepts(8));

        config.indent_inside_class_struct_body = false;
        assert!(handler.suggested_child_level(&config).accepts(4));
    }
}
