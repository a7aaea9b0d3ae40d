//! Violation types and the ordered violation sink.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::tree::SourceExtent;

/// The indentation rule a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKind {
    /// Brace placement rules.
    #[serde(rename = "indent.brace")]
    Brace,
    /// Statement and declaration alignment rules.
    #[serde(rename = "indent.statement")]
    Statement,
}

impl RuleKind {
    /// The rule's stable identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brace => "indent.brace",
            Self::Statement => "indent.statement",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source code location of a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// File the violation was found in.
    pub file: PathBuf,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based, raw character offset).
    pub column: usize,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// The location of an extent's first character.
    #[must_use]
    pub fn of(extent: &SourceExtent) -> Self {
        Self {
            file: extent.file.clone(),
            line: extent.start.line,
            column: extent.start.column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// One reported rule violation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Rule the violation belongs to.
    pub rule: RuleKind,
    /// Where the violation was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a violation.
    #[must_use]
    pub fn new(rule: RuleKind, location: Location, message: impl Into<String>) -> Self {
        Self {
            rule,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.rule, self.message)
    }
}

/// Ordered collection of violations; insertion order is discovery order.
///
/// The sink is owned by one traversal session and never sorted; callers
/// that want a different order re-order their own copy.
#[derive(Debug, Default)]
pub struct ViolationSink {
    violations: Vec<Violation>,
}

impl ViolationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation.
    pub fn report(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// The violations recorded so far, in discovery order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true iff nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Consumes the sink, yielding the violations in discovery order.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Result of one completed traversal session.
#[derive(Debug, Default, Serialize)]
pub struct LintResult {
    /// Violations in node-visitation (pre-order) order.
    pub violations: Vec<Violation>,
    /// Number of tree nodes visited.
    pub nodes_visited: usize,
}

impl LintResult {
    /// Returns true iff no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Formats a human-readable report, one violation per line plus a
    /// trailing summary.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for violation in &self.violations {
            let _ = writeln!(report, "{violation}");
        }
        let _ = writeln!(
            report,
            "Found {} violation(s) in {} node(s)",
            self.violations.len(),
            self.nodes_visited
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brace_violation(line: usize) -> Violation {
        Violation::new(
            RuleKind::Brace,
            Location::new("src/a.cpp", line, 5),
            "Closing brace should be on the same column as the block start.",
        )
    }

    #[test]
    fn display_is_path_line_column_rule_message() {
        let v = brace_violation(3);
        assert_eq!(
            v.to_string(),
            "src/a.cpp:3:5: indent.brace: Closing brace should be on the same column as the block start."
        );
    }

    #[test]
    fn sink_preserves_insertion_order() {
        let mut sink = ViolationSink::new();
        sink.report(brace_violation(9));
        sink.report(brace_violation(2));
        sink.report(brace_violation(5));

        let lines: Vec<usize> = sink
            .violations()
            .iter()
            .map(|v| v.location.line)
            .collect();
        assert_eq!(lines, vec![9, 2, 5]);
    }

    #[test]
    fn rule_kind_identifiers_are_stable() {
        assert_eq!(RuleKind::Brace.as_str(), "indent.brace");
        assert_eq!(RuleKind::Statement.as_str(), "indent.statement");
    }

    #[test]
    fn violations_serialize_for_report_consumers() {
        let json = serde_json::to_value(brace_violation(3)).expect("violation should serialize");
        assert_eq!(json["rule"], "indent.brace");
        assert_eq!(json["location"]["line"], 3);
    }

    #[test]
    fn report_lists_violations_and_summary() {
        let result = LintResult {
            violations: vec![brace_violation(3)],
            nodes_visited: 7,
        };
        insta::assert_snapshot!(result.format_report().trim_end(), @r"
        src/a.cpp:3:5: indent.brace: Closing brace should be on the same column as the block start.
        Found 1 violation(s) in 7 node(s)
        ");
    }

    #[test]
    fn empty_result_is_clean() {
        let result = LintResult::default();
        assert!(result.is_clean());
        assert_eq!(result.format_report(), "Found 0 violation(s) in 0 node(s)\n");
    }
}
