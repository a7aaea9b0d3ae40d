//! The one-call checking entry point.

use indent_lint_core::{
    CheckError, HandlerRegistry, IndentationCheck, IndentationConfig, LineCache, LintResult,
    SyntaxNode, TokenProvider,
};
use indent_lint_handlers::default_registry;
use tracing::info;

/// Runs one indentation-checking traversal over `root` with the default
/// handler catalogue.
///
/// The caller supplies the external collaborators: the parsed tree, the
/// tokenizer, and the file line cache. Violations come back in
/// node-visitation order.
///
/// # Errors
///
/// Returns [`CheckError`] when the traversal aborts on a dispatch
/// failure; the partial violation list is not returned because it cannot
/// be trusted as complete.
pub fn check_tree(
    root: &SyntaxNode,
    tokens: &dyn TokenProvider,
    lines: &dyn LineCache,
    config: &IndentationConfig,
) -> Result<LintResult, CheckError> {
    let registry = default_registry();
    check_tree_with_registry(root, tokens, lines, config, &registry)
}

/// Like [`check_tree`], but with a caller-assembled handler registry.
///
/// # Errors
///
/// Returns [`CheckError::UnhandledKind`] when the walk reaches a kind the
/// registry does not cover.
pub fn check_tree_with_registry(
    root: &SyntaxNode,
    tokens: &dyn TokenProvider,
    lines: &dyn LineCache,
    config: &IndentationConfig,
    registry: &HandlerRegistry,
) -> Result<LintResult, CheckError> {
    let check = IndentationCheck::new(registry, config, tokens, lines);
    let result = check.run(root)?;
    info!(
        violations = result.violations.len(),
        nodes = result.nodes_visited,
        "indentation check complete"
    );
    Ok(result)
}
