//! Tokens, token windows, and the tokenizer interface.

use crate::tree::{SourceExtent, SourcePos};

/// Coarse token classification as reported by the external tokenizer.
///
/// The checker only ever needs to tell punctuation apart from everything
/// else; the remaining variants are carried through for completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Braces, parentheses, operators, separators.
    Punctuation,
    /// Language keywords.
    Keyword,
    /// Identifiers.
    Identifier,
    /// Numeric, character, and string literals.
    Literal,
    /// Comments, when the tokenizer reports them.
    Comment,
}

/// One token produced by the external tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Classification of the token.
    pub kind: TokenKind,
    /// The token's text.
    pub spelling: String,
    /// Source range the token covers.
    pub extent: SourceExtent,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, spelling: impl Into<String>, extent: SourceExtent) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            extent,
        }
    }

    /// Returns true iff the token is punctuation with the given spelling.
    #[must_use]
    pub fn is_punctuation(&self, spelling: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.spelling == spelling
    }
}

/// Supplies the ordered token sequence covering a source extent.
///
/// Implemented by the external tokenizer; the engine never computes token
/// boundaries itself.
pub trait TokenProvider {
    /// Returns the tokens whose start position lies within `extent`, in
    /// source order.
    fn tokens_in(&self, extent: &SourceExtent) -> Vec<Token>;
}

/// The ordered token slice covering one node's extent.
///
/// Computed lazily per handler and cached there; read-only afterwards.
#[derive(Debug, Clone)]
pub struct TokenWindow {
    tokens: Vec<Token>,
}

impl TokenWindow {
    /// Wraps a token sequence.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Returns true iff the window holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// The first token of the window.
    #[must_use]
    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// The first `{` punctuation token, if any.
    #[must_use]
    pub fn opening_brace(&self) -> Option<&Token> {
        self.tokens.iter().find(|t| t.is_punctuation("{"))
    }

    /// The last `}` punctuation token, if any.
    #[must_use]
    pub fn closing_brace(&self) -> Option<&Token> {
        self.tokens.iter().rev().find(|t| t.is_punctuation("}"))
    }

    /// The token immediately preceding the first `{`, if both exist.
    ///
    /// This is the block's owner token: a class name, base-clause
    /// terminator, or namespace name.
    #[must_use]
    pub fn token_before_opening_brace(&self) -> Option<&Token> {
        let mut previous = None;
        for token in &self.tokens {
            if token.is_punctuation("{") {
                return previous;
            }
            previous = Some(token);
        }
        None
    }
}

/// [`TokenProvider`] over a pre-tokenized file.
///
/// Holds the full token stream of one or more files and answers extent
/// queries by filtering on start position. No tokenization happens here;
/// the stream comes from the external parser.
#[derive(Debug, Default)]
pub struct TokenIndex {
    tokens: Vec<Token>,
}

impl TokenIndex {
    /// Creates an index over a token stream in source order.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Appends a token to the stream.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

impl TokenProvider for TokenIndex {
    fn tokens_in(&self, extent: &SourceExtent) -> Vec<Token> {
        self.tokens
            .iter()
            .filter(|t| extent.contains(&t.extent.file, t.extent.start))
            .cloned()
            .collect()
    }
}

/// Convenience constructor for a single-position token extent.
#[must_use]
pub fn token_extent(
    file: impl Into<std::path::PathBuf>,
    line: usize,
    column: usize,
    len: usize,
) -> SourceExtent {
    SourceExtent::new(
        file,
        SourcePos::new(line, column),
        SourcePos::new(line, column + len.saturating_sub(1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn punct(spelling: &str, line: usize, column: usize) -> Token {
        Token::new(TokenKind::Punctuation, spelling, token_extent("a.cpp", line, column, spelling.len()))
    }

    fn ident(spelling: &str, line: usize, column: usize) -> Token {
        Token::new(TokenKind::Identifier, spelling, token_extent("a.cpp", line, column, spelling.len()))
    }

    fn kw(spelling: &str, line: usize, column: usize) -> Token {
        Token::new(TokenKind::Keyword, spelling, token_extent("a.cpp", line, column, spelling.len()))
    }

    // class C { int x ; } ;
    fn class_window() -> TokenWindow {
        TokenWindow::new(vec![
            kw("class", 1, 1),
            ident("C", 1, 7),
            punct("{", 1, 9),
            kw("int", 2, 5),
            ident("x", 2, 9),
            punct(";", 2, 10),
            punct("}", 3, 1),
            punct(";", 3, 2),
        ])
    }

    #[test]
    fn brace_queries_find_outermost_pair() {
        let window = class_window();
        assert_eq!(window.opening_brace().map(|t| t.extent.start), Some(SourcePos::new(1, 9)));
        assert_eq!(window.closing_brace().map(|t| t.extent.start), Some(SourcePos::new(3, 1)));
    }

    #[test]
    fn owner_token_precedes_opening_brace() {
        let window = class_window();
        let owner = window.token_before_opening_brace().map(|t| t.spelling.as_str());
        assert_eq!(owner, Some("C"));
    }

    #[test]
    fn window_without_braces_reports_none() {
        let window = TokenWindow::new(vec![kw("typedef", 1, 1), ident("T", 1, 9)]);
        assert!(window.opening_brace().is_none());
        assert!(window.closing_brace().is_none());
        assert!(window.token_before_opening_brace().is_none());
    }

    #[test]
    fn leading_brace_has_no_owner() {
        let window = TokenWindow::new(vec![punct("{", 1, 1), punct("}", 2, 1)]);
        assert!(window.opening_brace().is_some());
        assert!(window.token_before_opening_brace().is_none());
    }

    #[test]
    fn token_index_filters_by_extent() {
        let index = TokenIndex::new(vec![
            kw("class", 1, 1),
            ident("C", 1, 7),
            punct("{", 1, 9),
            punct("}", 3, 1),
            kw("typedef", 5, 1),
        ]);

        let class_extent =
            SourceExtent::new("a.cpp", SourcePos::new(1, 1), SourcePos::new(3, 2));
        let tokens = index.tokens_in(&class_extent);
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].spelling, "class");
        assert_eq!(tokens[3].spelling, "}");
    }

    #[test]
    fn token_index_ignores_other_files() {
        let index = TokenIndex::new(vec![kw("class", 1, 1)]);
        let other =
            SourceExtent::new("b.cpp", SourcePos::new(1, 1), SourcePos::new(9, 1));
        assert!(index.tokens_in(&other).is_empty());
    }
}
