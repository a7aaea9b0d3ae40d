//! The indentation policy schema.

use std::fmt;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permitted placement of a block's braces relative to its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BraceStyle {
    /// Opening brace on the same line as the owner token; closing brace
    /// aligned with the block start.
    SameLine,
    /// Both braces aligned with the block start on their own lines.
    NextLine,
    /// Both braces one indentation unit deeper than the block start.
    NextLineIndent,
}

impl fmt::Display for BraceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameLine => write!(f, "same-line"),
            Self::NextLine => write!(f, "next-line"),
            Self::NextLineIndent => write!(f, "next-line-indent"),
        }
    }
}

/// Which whitespace characters are accepted for indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabPolicy {
    /// Indentation must use tabs.
    TabsOnly,
    /// Indentation must use spaces.
    SpacesOnly,
    /// Tabs and spaces may be mixed.
    Mixed,
}

impl fmt::Display for TabPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TabsOnly => write!(f, "tabs-only"),
            Self::SpacesOnly => write!(f, "spaces-only"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

/// Configuration for the indentation check.
///
/// The defaults reproduce a K&R profile. The schema is fixed: an option
/// name outside this struct fails [`IndentationConfig::parse`] (unknown
/// fields are denied), and an invalid enum value fails at deserialization
/// time, both before any traversal starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndentationConfig {
    // General settings.
    /// The policy for indentation whitespace.
    pub tab_policy: TabPolicy,
    /// Number of columns one nesting level adds.
    pub indentation_size: usize,
    /// Number of columns one tab character is wide.
    pub tab_size: usize,

    // Indent flags.
    /// Indent `public`/`protected`/`private` within a class body.
    pub indent_visibility_specifiers: bool,
    /// Indent declarations relative to visibility specifiers.
    pub indent_below_visibility_specifiers: bool,
    /// Indent declarations relative to a class/struct body.
    pub indent_inside_class_struct_body: bool,
    /// Indent statements within function bodies.
    pub indent_statements_within_function_bodies: bool,
    /// Indent statements within blocks.
    pub indent_statements_within_blocks: bool,
    /// Indent statements within a switch body.
    pub indent_statements_within_switch_body: bool,
    /// Indent statements within a case body.
    pub indent_statements_within_case_body: bool,
    /// Indent `break` statements.
    pub indent_break_statements: bool,
    /// Indent declarations within a namespace definition.
    pub indent_declarations_within_namespace_definition: bool,

    // Brace positions.
    /// Brace placement for class and struct declarations.
    pub brace_positions_class_struct_declaration: BraceStyle,
    /// Brace placement for namespace declarations.
    pub brace_positions_namespace_declaration: BraceStyle,
    /// Brace placement for function declarations.
    pub brace_positions_function_declaration: BraceStyle,
    /// Brace placement for blocks.
    pub brace_positions_blocks: BraceStyle,
    /// Brace placement for blocks in case statements.
    pub brace_positions_blocks_in_case_statement: BraceStyle,
    /// Brace placement for switch statements.
    pub brace_positions_switch_statement: BraceStyle,
    /// Brace placement for initializer lists.
    pub brace_positions_initializer_list: BraceStyle,
    /// Keep an empty initializer list on one line.
    pub keep_empty_initializer_list_on_one_line: bool,
}

impl Default for IndentationConfig {
    fn default() -> Self {
        Self {
            tab_policy: TabPolicy::SpacesOnly,
            indentation_size: 4,
            tab_size: 4,
            indent_visibility_specifiers: false,
            indent_below_visibility_specifiers: true,
            indent_inside_class_struct_body: true,
            indent_statements_within_function_bodies: true,
            indent_statements_within_blocks: true,
            indent_statements_within_switch_body: false,
            indent_statements_within_case_body: true,
            indent_break_statements: true,
            indent_declarations_within_namespace_definition: false,
            brace_positions_class_struct_declaration: BraceStyle::SameLine,
            brace_positions_namespace_declaration: BraceStyle::SameLine,
            brace_positions_function_declaration: BraceStyle::SameLine,
            brace_positions_blocks: BraceStyle::SameLine,
            brace_positions_blocks_in_case_statement: BraceStyle::SameLine,
            brace_positions_switch_statement: BraceStyle::SameLine,
            brace_positions_initializer_list: BraceStyle::SameLine,
            keep_empty_initializer_list_on_one_line: true,
        }
    }
}

impl IndentationConfig {
    /// Creates the default K&R-profile configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains an unknown
    /// option, an invalid enum value, or a zero-valued size.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML, unknown options, invalid enum
    /// values, or zero-valued sizes.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the value constraints the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if `indentation_size` or `tab_size` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indentation_size == 0 {
            return Err(ConfigError::InvalidValue {
                option: "indentation_size",
                message: "must be at least 1".to_string(),
            });
        }
        if self.tab_size == 0 {
            return Err(ConfigError::InvalidValue {
                option: "tab_size",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration errors, all fatal before a traversal starts.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// IO error reading a config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Invalid TOML, unknown option name, or invalid enum value.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// An option with a value outside its permitted range.
    #[error("invalid value for `{option}`: {message}")]
    InvalidValue {
        /// Option that failed validation.
        option: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_knr_profile() {
        let config = IndentationConfig::default();
        assert_eq!(config.tab_policy, TabPolicy::SpacesOnly);
        assert_eq!(config.indentation_size, 4);
        assert_eq!(config.tab_size, 4);
        assert!(config.indent_inside_class_struct_body);
        assert!(!config.indent_statements_within_switch_body);
        assert!(!config.indent_declarations_within_namespace_definition);
        assert_eq!(
            config.brace_positions_class_struct_declaration,
            BraceStyle::SameLine
        );
    }

    #[test]
    fn parse_overrides_selected_options() {
        let config = IndentationConfig::parse(
            r#"
indentation_size = 2
tab_policy = "tabs-only"
brace_positions_namespace_declaration = "next-line-indent"
indent_declarations_within_namespace_definition = true
"#,
        )
        .expect("config should parse");
        assert_eq!(config.indentation_size, 2);
        assert_eq!(config.tab_policy, TabPolicy::TabsOnly);
        assert_eq!(
            config.brace_positions_namespace_declaration,
            BraceStyle::NextLineIndent
        );
        assert!(config.indent_declarations_within_namespace_definition);
        // Untouched options keep their defaults.
        assert_eq!(config.tab_size, 4);
    }

    #[test]
    fn unknown_option_is_fatal() {
        let err = IndentationConfig::parse("indent_empty_lines = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("indent_empty_lines"));
    }

    #[test]
    fn invalid_brace_style_is_fatal() {
        let err = IndentationConfig::parse(
            r#"brace_positions_blocks = "same-line-indented""#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let err = IndentationConfig::parse("indentation_size = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                option: "indentation_size",
                ..
            }
        ));

        let err = IndentationConfig::parse("tab_size = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { option: "tab_size", .. }
        ));
    }

    #[test]
    fn brace_styles_render_kebab_case() {
        assert_eq!(BraceStyle::SameLine.to_string(), "same-line");
        assert_eq!(BraceStyle::NextLine.to_string(), "next-line");
        assert_eq!(BraceStyle::NextLineIndent.to_string(), "next-line-indent");
    }
}
