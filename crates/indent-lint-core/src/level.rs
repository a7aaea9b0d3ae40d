//! Acceptable indentation levels.

use std::collections::BTreeSet;
use std::fmt;

/// A non-empty set of column values considered correctly indented at one
/// position in the syntax tree.
///
/// Most levels hold a single column, but a node may legally share a level
/// with more than one candidate parent offset (partial specializations,
/// template aliasing), so the whole candidate set is preserved and
/// propagated instead of being collapsed to one value.
///
/// A level is a value: [`IndentLevel::derive`] produces a new level and the
/// source is never touched. The only mutations are the explicit
/// [`add_column`](IndentLevel::add_column) / [`add_level`](IndentLevel::add_level)
/// unions a rule calls when it intentionally widens acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentLevel {
    columns: BTreeSet<usize>,
}

impl IndentLevel {
    /// Creates a level accepting exactly one column.
    #[must_use]
    pub fn singleton(column: usize) -> Self {
        let mut columns = BTreeSet::new();
        columns.insert(column);
        Self { columns }
    }

    /// Creates a level accepting `{c + offset : c in base}`.
    ///
    /// Cardinality is preserved: every candidate column of `base` yields
    /// exactly one candidate in the derived level.
    #[must_use]
    pub fn derive(base: &Self, offset: usize) -> Self {
        Self {
            columns: base.columns.iter().map(|c| c + offset).collect(),
        }
    }

    /// Returns true iff `column` is an accepted indentation.
    #[must_use]
    pub fn accepts(&self, column: usize) -> bool {
        self.columns.contains(&column)
    }

    /// Returns true iff the largest accepted column is strictly greater
    /// than `column` (the node is indented too little).
    #[must_use]
    pub fn exceeds(&self, column: usize) -> bool {
        self.columns.iter().next_back().is_some_and(|&max| max > column)
    }

    /// Returns true iff more than one column is accepted.
    #[must_use]
    pub fn is_multivalued(&self) -> bool {
        self.columns.len() > 1
    }

    /// Number of accepted columns. Never zero.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.columns.len()
    }

    /// Accepts one additional column.
    pub fn add_column(&mut self, column: usize) {
        self.columns.insert(column);
    }

    /// Accepts every column of `other` in addition to the current set.
    pub fn add_level(&mut self, other: &Self) {
        self.columns.extend(other.columns.iter().copied());
    }

    /// The accepted columns in ascending order.
    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns.iter().copied()
    }
}

impl fmt::Display for IndentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{column}")?;
        }
        write!(f, "}}")
    }
}
