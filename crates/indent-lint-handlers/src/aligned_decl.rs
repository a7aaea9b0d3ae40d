//! Handler for line-starting declarations with a direct alignment check.

use indent_lint_core::{
    CheckContext, HandlerBase, IndentLevel, Location, NodeHandler, RuleKind, SyntaxNode,
    Violation, ViolationSink,
};
use tracing::debug;

/// Verifies that a declaration starts at an accepted column.
///
/// Registered for typedefs and member declarations. The check only fires
/// when the declaration is the first thing on its line; a declaration
/// written mid-line (`struct S { int x; };`) has no column of its own to
/// verify.
pub struct AlignedDeclHandler<'t> {
    base: HandlerBase<'t>,
}

impl AlignedDeclHandler<'_> {
    /// Handler constructor for the dispatch registry.
    #[must_use]
    pub fn construct<'t>(node: &'t SyntaxNode, level: IndentLevel) -> Box<dyn NodeHandler + 't> {
        Box::new(AlignedDeclHandler {
            base: HandlerBase::new(node, level),
        })
    }
}

impl NodeHandler for AlignedDeclHandler<'_> {
    fn level(&self) -> &IndentLevel {
        self.base.level()
    }

    fn check_indentation(&self, ctx: &CheckContext<'_>, sink: &mut ViolationSink) {
        let extent = &self.base.node().extent;
        if !ctx.starts_line(extent) {
            debug!(
                line = extent.start.line,
                column = extent.start.column,
                "declaration does not start its line, skipping alignment check"
            );
            return;
        }
        let Some(column) = self.base.expanded_start_column(ctx) else {
            return;
        };
        if !self.base.level().accepts(column) {
            sink.report(Violation::new(
                RuleKind::Statement,
                Location::of(extent),
                "Invalid indentation level.",
            ));
        }
    }
}
