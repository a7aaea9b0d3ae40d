//! Node handlers: the per-node position-checking obligation.
//!
//! One handler exists per tree node on the current root-to-node path. A
//! handler's [`IndentLevel`] is fixed at construction from its parent's
//! suggestion and never changes afterwards; checks run once, immediately
//! after construction.

use std::cell::OnceCell;
use std::path::Path;

use tracing::warn;

use crate::column::expanded_column;
use crate::config::{BraceStyle, IndentationConfig};
use crate::level::IndentLevel;
use crate::lines::LineCache;
use crate::token::{Token, TokenProvider, TokenWindow};
use crate::tree::{SourceExtent, SourcePos, SyntaxNode};
use crate::types::{Location, RuleKind, Violation, ViolationSink};

/// The external collaborators a check runs against.
///
/// Bundles the configuration, the tokenizer, and the file line cache for
/// one traversal session. The context is stateless and shared by every
/// handler of the session.
pub struct CheckContext<'s> {
    /// The indentation policy in effect.
    pub config: &'s IndentationConfig,
    /// The external tokenizer.
    pub tokens: &'s dyn TokenProvider,
    /// The external file line cache.
    pub lines: &'s dyn LineCache,
}

impl<'s> CheckContext<'s> {
    /// Creates a context over the given collaborators.
    #[must_use]
    pub fn new(
        config: &'s IndentationConfig,
        tokens: &'s dyn TokenProvider,
        lines: &'s dyn LineCache,
    ) -> Self {
        Self {
            config,
            tokens,
            lines,
        }
    }

    /// The tab-expanded column of `pos` in `file`.
    ///
    /// Returns `None` when the line cache cannot produce the line; the
    /// caller skips the affected check.
    #[must_use]
    pub fn expanded_column_at(&self, file: &Path, pos: SourcePos) -> Option<usize> {
        let Some(line) = self.lines.line(file, pos.line) else {
            warn!(
                file = %file.display(),
                line = pos.line,
                "line not available in cache, skipping column check"
            );
            return None;
        };
        Some(expanded_column(
            line,
            pos.column.saturating_sub(1),
            self.config.tab_size,
        ))
    }

    /// Returns true iff the extent starts at the first non-blank character
    /// of its line.
    #[must_use]
    pub fn starts_line(&self, extent: &SourceExtent) -> bool {
        self.lines
            .line(&extent.file, extent.start.line)
            .is_some_and(|line| {
                line.chars()
                    .take(extent.start.column.saturating_sub(1))
                    .all(char::is_whitespace)
            })
    }
}

/// One syntax-tree node's checking obligation.
///
/// Concrete handlers embed a [`HandlerBase`] and override the methods
/// their kind needs; the defaults model the common case of a node with no
/// direct obligation that passes its own level through to its children.
pub trait NodeHandler {
    /// The set of columns this node may legally start at. Fixed at
    /// construction.
    fn level(&self) -> &IndentLevel;

    /// Whether children sit one indentation unit deeper than this node.
    fn should_increase_indent(&self, _config: &IndentationConfig) -> bool {
        false
    }

    /// The level suggested for a child handler.
    ///
    /// Derivation keeps every candidate column of this node's own level.
    fn suggested_child_level(&self, config: &IndentationConfig) -> IndentLevel {
        if self.should_increase_indent(config) {
            IndentLevel::derive(self.level(), config.indentation_size)
        } else {
            IndentLevel::derive(self.level(), 0)
        }
    }

    /// Checks this node's own position, reporting violations to `sink`.
    ///
    /// Most kinds have nothing to check directly; their correctness is
    /// inherited transitively through their children's checks.
    fn check_indentation(&self, _ctx: &CheckContext<'_>, _sink: &mut ViolationSink) {}
}

/// Shared per-node state embedded by concrete handlers: the borrowed
/// node, the handler's own level, and the lazily filled token window.
pub struct HandlerBase<'t> {
    node: &'t SyntaxNode,
    level: IndentLevel,
    window: OnceCell<TokenWindow>,
}

impl<'t> HandlerBase<'t> {
    /// Creates the base state for a node at the given level.
    #[must_use]
    pub fn new(node: &'t SyntaxNode, level: IndentLevel) -> Self {
        Self {
            node,
            level,
            window: OnceCell::new(),
        }
    }

    /// The node being checked.
    #[must_use]
    pub fn node(&self) -> &'t SyntaxNode {
        self.node
    }

    /// The handler's own level.
    #[must_use]
    pub fn level(&self) -> &IndentLevel {
        &self.level
    }

    /// The token window covering the node's extent, tokenized on first
    /// access and cached for the handler's lifetime.
    pub fn token_window(&self, ctx: &CheckContext<'_>) -> &TokenWindow {
        self.window
            .get_or_init(|| TokenWindow::new(ctx.tokens.tokens_in(&self.node.extent)))
    }

    /// The tab-expanded column of the node's first character.
    #[must_use]
    pub fn expanded_start_column(&self, ctx: &CheckContext<'_>) -> Option<usize> {
        ctx.expanded_column_at(&self.node.extent.file, self.node.extent.start)
    }
}

/// The sentinel handler at the base of the traversal stack.
///
/// It has no node, accepts exactly column 0, and checks nothing.
pub struct RootHandler {
    level: IndentLevel,
}

impl RootHandler {
    /// Creates the root handler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: IndentLevel::singleton(0),
        }
    }
}

impl Default for RootHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeHandler for RootHandler {
    fn level(&self) -> &IndentLevel {
        &self.level
    }
}

/// Verifies the placement of a block's opening and closing braces against
/// the given style.
///
/// The block's tokens come from `base`'s window: the opening brace is the
/// first `{`, the closing brace the last `}`, and the owner token the one
/// immediately preceding the opening brace. A window without an opening
/// brace is a braceless node and checks nothing (the other two tokens
/// must then be absent as well).
///
/// All column comparisons use tab-expanded columns so files mixing tabs
/// and spaces are compared on a normalized scale; line comparisons use
/// raw line numbers.
pub fn check_curly_braces(
    base: &HandlerBase<'_>,
    style: BraceStyle,
    ctx: &CheckContext<'_>,
    sink: &mut ViolationSink,
) {
    let window = base.token_window(ctx);
    let Some(lbrace) = window.opening_brace() else {
        debug_assert!(
            window.closing_brace().is_none(),
            "closing brace without opening brace in {:?}",
            base.node().extent
        );
        return;
    };
    let rbrace = window.closing_brace();
    debug_assert!(
        rbrace.is_some(),
        "opening brace without closing brace in {:?}",
        base.node().extent
    );
    let owner = window.token_before_opening_brace();
    let Some(first) = window.first() else {
        return;
    };

    match style {
        BraceStyle::SameLine => {
            if !owner.is_some_and(|t| t.extent.start.line == lbrace.extent.start.line) {
                sink.report(Violation::new(
                    RuleKind::Brace,
                    Location::of(&lbrace.extent),
                    "Opening brace should be on the same line as the preceding token.",
                ));
            }
            check_closing_brace_aligned(first, rbrace, ctx, sink);
        }
        BraceStyle::NextLine => {
            if !on_same_expanded_column(first, lbrace, ctx) {
                sink.report(Violation::new(
                    RuleKind::Brace,
                    Location::of(&lbrace.extent),
                    "Opening brace should be on the same column as the block start.",
                ));
            }
            check_brace_adjacency(owner, lbrace, sink);
            check_closing_brace_aligned(first, rbrace, ctx, sink);
        }
        BraceStyle::NextLineIndent => {
            check_brace_adjacency(owner, lbrace, sink);
            // Both braces sit one level deeper than the block start.
            let next_level = IndentLevel::derive(base.level(), ctx.config.indentation_size);
            if let Some(column) = ctx.expanded_column_at(&lbrace.extent.file, lbrace.extent.start)
            {
                if !next_level.accepts(column) {
                    sink.report(Violation::new(
                        RuleKind::Brace,
                        Location::of(&lbrace.extent),
                        "Opening brace should be indented one level further than the block start.",
                    ));
                }
            }
            if let Some(rbrace) = rbrace {
                if let Some(column) =
                    ctx.expanded_column_at(&rbrace.extent.file, rbrace.extent.start)
                {
                    if !next_level.accepts(column) {
                        sink.report(Violation::new(
                            RuleKind::Brace,
                            Location::of(&rbrace.extent),
                            "Closing brace should be indented one level further than the block start.",
                        ));
                    }
                }
            }
        }
    }
}

/// True iff both tokens resolve to the same tab-expanded column.
///
/// Unresolvable columns count as matching; the check is skipped rather
/// than reported against a line the cache cannot produce.
fn on_same_expanded_column(a: &Token, b: &Token, ctx: &CheckContext<'_>) -> bool {
    match (
        ctx.expanded_column_at(&a.extent.file, a.extent.start),
        ctx.expanded_column_at(&b.extent.file, b.extent.start),
    ) {
        (Some(col_a), Some(col_b)) => col_a == col_b,
        _ => true,
    }
}

fn check_closing_brace_aligned(
    first: &Token,
    rbrace: Option<&Token>,
    ctx: &CheckContext<'_>,
    sink: &mut ViolationSink,
) {
    let Some(rbrace) = rbrace else {
        return;
    };
    if !on_same_expanded_column(first, rbrace, ctx) {
        sink.report(Violation::new(
            RuleKind::Brace,
            Location::of(&rbrace.extent),
            "Closing brace should be on the same column as the block start.",
        ));
    }
}

fn check_brace_adjacency(owner: Option<&Token>, lbrace: &Token, sink: &mut ViolationSink) {
    if owner.is_some_and(|t| lbrace.extent.start.line == t.extent.start.line + 1) {
        sink.report(Violation::new(
            RuleKind::Brace,
            Location::of(&lbrace.extent),
            "Opening brace should be on the line directly after the block start.",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::MemoryLines;
    use crate::token::{TokenIndex, TokenKind};
    use crate::tree::NodeKind;

    fn token(kind: TokenKind, spelling: &str, line: usize, column: usize) -> Token {
        Token::new(
            kind,
            spelling,
            SourceExtent::new(
                "a.cpp",
                SourcePos::new(line, column),
                SourcePos::new(line, column + spelling.len().saturating_sub(1)),
            ),
        )
    }

    fn punct(spelling: &str, line: usize, column: usize) -> Token {
        token(TokenKind::Punctuation, spelling, line, column)
    }

    fn node_spanning(lines: usize) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::ClassDecl,
            SourceExtent::new("a.cpp", SourcePos::new(1, 1), SourcePos::new(lines, 200)),
        )
    }

    fn run_brace_check(
        source: &str,
        tokens: Vec<Token>,
        style: BraceStyle,
        level: IndentLevel,
    ) -> Vec<Violation> {
        let config = IndentationConfig::default();
        let index = TokenIndex::new(tokens);
        let lines = MemoryLines::new().with_file("a.cpp", source);
        let ctx = CheckContext::new(&config, &index, &lines);
        let node = node_spanning(source.lines().count().max(1));
        let base = HandlerBase::new(&node, level);
        let mut sink = ViolationSink::new();
        check_curly_braces(&base, style, &ctx, &mut sink);
        sink.into_violations()
    }

    fn class_tokens(lbrace: (usize, usize), rbrace: (usize, usize)) -> Vec<Token> {
        vec![
            token(TokenKind::Keyword, "class", 1, 1),
            token(TokenKind::Identifier, "C", 1, 7),
            punct("{", lbrace.0, lbrace.1),
            punct("}", rbrace.0, rbrace.1),
            punct(";", rbrace.0, rbrace.1 + 1),
        ]
    }

    #[test]
    fn root_handler_accepts_only_column_zero() {
        let root = RootHandler::new();
        assert!(root.level().accepts(0));
        assert!(!root.level().accepts(1));
        assert_eq!(root.level().cardinality(), 1);
    }

    #[test]
    fn same_line_accepts_knr_layout() {
        let source = "class C {\n    int x;\n};\n";
        let violations = run_brace_check(
            source,
            class_tokens((1, 9), (3, 1)),
            BraceStyle::SameLine,
            IndentLevel::singleton(0),
        );
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn same_line_rejects_brace_on_next_line() {
        let source = "class C\n{\n    int x;\n};\n";
        let violations = run_brace_check(
            source,
            class_tokens((2, 1), (4, 1)),
            BraceStyle::SameLine,
            IndentLevel::singleton(0),
        );
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, RuleKind::Brace);
        assert_eq!(violations[0].location.line, 2);
        assert!(violations[0].message.contains("same line"));
    }

    #[test]
    fn same_line_rejects_misaligned_closing_brace() {
        let source = "class C {\n    int x;\n  };\n";
        let violations = run_brace_check(
            source,
            class_tokens((1, 9), (3, 3)),
            BraceStyle::SameLine,
            IndentLevel::singleton(0),
        );
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 3);
        assert!(violations[0].message.contains("Closing brace"));
    }

    #[test]
    fn same_line_closing_brace_compares_expanded_columns() {
        // Block start behind a tab (width 4) on line 1, closing brace
        // behind four spaces: both resolve to column 4.
        let source = "\tclass C {\n\tint x;\n    };\n";
        let tokens = vec![
            token(TokenKind::Keyword, "class", 1, 2),
            token(TokenKind::Identifier, "C", 1, 8),
            punct("{", 1, 10),
            punct("}", 3, 5),
        ];
        let violations = run_brace_check(
            source,
            tokens,
            BraceStyle::SameLine,
            IndentLevel::singleton(4),
        );
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn next_line_requires_brace_on_block_start_column() {
        let source = "class C\n\n  {\n\n}\n";
        let violations = run_brace_check(
            source,
            class_tokens((3, 3), (5, 1)),
            BraceStyle::NextLine,
            IndentLevel::singleton(0),
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("same column"));
    }

    #[test]
    fn next_line_rejects_brace_directly_after_owner() {
        let source = "class C\n{\n\n}\n";
        let violations = run_brace_check(
            source,
            class_tokens((2, 1), (4, 1)),
            BraceStyle::NextLine,
            IndentLevel::singleton(0),
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("directly after"));
    }

    #[test]
    fn next_line_accepts_aligned_detached_braces() {
        let source = "class C\n\n{\n\n}\n";
        let violations = run_brace_check(
            source,
            class_tokens((3, 1), (5, 1)),
            BraceStyle::NextLine,
            IndentLevel::singleton(0),
        );
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn next_line_indent_accepts_braces_one_level_deeper() {
        let source = "class C\n\n    {\n\n    }\n";
        let violations = run_brace_check(
            source,
            class_tokens((3, 5), (5, 5)),
            BraceStyle::NextLineIndent,
            IndentLevel::singleton(0),
        );
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn next_line_indent_rejects_flush_opening_brace() {
        let source = "class C\n\n{\n\n    }\n";
        let violations = run_brace_check(
            source,
            class_tokens((3, 1), (5, 5)),
            BraceStyle::NextLineIndent,
            IndentLevel::singleton(0),
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Opening brace"));
        assert!(violations[0].message.contains("one level further"));
    }

    #[test]
    fn next_line_indent_rejects_half_indented_opening_brace() {
        let source = "class C\n\n  {\n\n    }\n";
        let violations = run_brace_check(
            source,
            class_tokens((3, 3), (5, 5)),
            BraceStyle::NextLineIndent,
            IndentLevel::singleton(0),
        );
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.column, 3);
    }

    #[test]
    fn next_line_indent_rejects_flush_closing_brace() {
        let source = "class C\n\n    {\n\n}\n";
        let violations = run_brace_check(
            source,
            class_tokens((3, 5), (5, 1)),
            BraceStyle::NextLineIndent,
            IndentLevel::singleton(0),
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Closing brace"));
    }

    #[test]
    fn braceless_window_checks_nothing() {
        let source = "typedef int T;\n";
        let tokens = vec![
            token(TokenKind::Keyword, "typedef", 1, 1),
            token(TokenKind::Keyword, "int", 1, 9),
            token(TokenKind::Identifier, "T", 1, 13),
            punct(";", 1, 14),
        ];
        let violations = run_brace_check(
            source,
            tokens,
            BraceStyle::SameLine,
            IndentLevel::singleton(0),
        );
        assert!(violations.is_empty());
    }

    // Default child-level derivation.

    struct PlainHandler {
        level: IndentLevel,
    }

    impl NodeHandler for PlainHandler {
        fn level(&self) -> &IndentLevel {
            &self.level
        }
    }

    struct NestingHandler {
        level: IndentLevel,
    }

    impl NodeHandler for NestingHandler {
        fn level(&self) -> &IndentLevel {
            &self.level
        }

        fn should_increase_indent(&self, _config: &IndentationConfig) -> bool {
            true
        }
    }

    #[test]
    fn child_level_defaults_to_parent_columns() {
        let config = IndentationConfig::default();
        let handler = PlainHandler {
            level: IndentLevel::singleton(8),
        };
        let child = handler.suggested_child_level(&config);
        assert!(child.accepts(8));
        assert!(!child.accepts(12));
    }

    #[test]
    fn child_level_adds_one_unit_when_nesting() {
        let config = IndentationConfig::default();
        let handler = NestingHandler {
            level: IndentLevel::singleton(8),
        };
        let child = handler.suggested_child_level(&config);
        assert!(child.accepts(12));
        assert!(!child.accepts(8));
    }

    #[test]
    fn multivalued_levels_survive_derivation() {
        let config = IndentationConfig::default();
        let mut level = IndentLevel::singleton(0);
        level.add_column(4);
        let handler = NestingHandler { level };
        let child = handler.suggested_child_level(&config);
        assert!(child.accepts(4));
        assert!(child.accepts(8));
        assert_eq!(child.cardinality(), 2);
    }
}
