//! Handler for class-like brace blocks.
//!
//! Covers class and struct declarations, class/struct templates, and
//! partial template specializations: the kinds that share the
//! `brace_positions_class_struct_declaration` style and the
//! `indent_inside_class_struct_body` nesting flag.

use indent_lint_core::{
    check_curly_braces, CheckContext, HandlerBase, IndentLevel, IndentationConfig, NodeHandler,
    SyntaxNode, ViolationSink,
};

/// Checks brace placement of a class or struct body and indents its
/// members when configured to.
pub struct ClassBodyHandler<'t> {
    base: HandlerBase<'t>,
}

impl ClassBodyHandler<'_> {
    /// Handler constructor for the dispatch registry.
    #[must_use]
    pub fn construct<'t>(node: &'t SyntaxNode, level: IndentLevel) -> Box<dyn NodeHandler + 't> {
        Box::new(ClassBodyHandler {
            base: HandlerBase::new(node, level),
        })
    }
}

impl NodeHandler for ClassBodyHandler<'_> {
    fn level(&self) -> &IndentLevel {
        self.base.level()
    }

    fn should_increase_indent(&self, config: &IndentationConfig) -> bool {
        config.indent_inside_class_struct_body
    }

    fn check_indentation(&self, ctx: &CheckContext<'_>, sink: &mut ViolationSink) {
        check_curly_braces(
            &self.base,
            ctx.config.brace_positions_class_struct_declaration,
            ctx,
            sink,
        );
    }
}
