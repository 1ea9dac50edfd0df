//! The column-matching rule mini-language.
//!
//! A rule string is a comma-separated list of groups, each group a kind
//! and a `|`-separated option list: `ends:_id|ids,equals:id`. An empty
//! rule string matches every value.

use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while parsing a rule string.
///
/// All of these are misconfiguration: they abort the run before any
/// table is processed.
#[derive(Debug, Error, Diagnostic)]
pub enum RuleError {
    #[error("unknown rule kind '{kind}'")]
    #[diagnostic(
        code(modelgen::invalid_rule),
        help("valid kinds are: starts, ends, equals")
    )]
    UnknownKind { kind: String },

    #[error("rule group '{group}' is missing the ':' separator")]
    #[diagnostic(
        code(modelgen::invalid_rule),
        help("rules are written as kind:opt1|opt2, e.g. ends:_at|_on")
    )]
    MissingSeparator { group: String },

    #[error("rule group '{group}' has an empty option")]
    #[diagnostic(
        code(modelgen::invalid_rule),
        help("every '|'-separated option must be non-empty")
    )]
    EmptyOption { group: String },
}

/// How a rule compares its options against a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Value begins with an option
    Starts,
    /// Value ends with an option
    Ends,
    /// Value equals an option
    Equals,
}

impl FromStr for RuleKind {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, RuleError> {
        match s {
            "starts" => Ok(RuleKind::Starts),
            "ends" => Ok(RuleKind::Ends),
            "equals" => Ok(RuleKind::Equals),
            other => Err(RuleError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A single matcher: a kind plus its options
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    options: Vec<String>,
}

impl Rule {
    /// `value` is expected to be lower-cased already; options are
    /// lower-case by convention of the calling code.
    fn matches(&self, value: &str) -> bool {
        let mut options = self.options.iter();
        match self.kind {
            RuleKind::Starts => options.any(|o| value.starts_with(o.as_str())),
            RuleKind::Ends => options.any(|o| value.ends_with(o.as_str())),
            RuleKind::Equals => options.any(|o| value == o.as_str()),
        }
    }
}

/// An ordered set of rules parsed from a rule string
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Parse a rule string. Spaces are stripped; an empty string yields
    /// the match-all set.
    pub fn parse(text: &str) -> Result<Self, RuleError> {
        let text: String = text.chars().filter(|c| *c != ' ').collect();
        if text.is_empty() {
            return Ok(Self::default());
        }

        let mut rules = Vec::new();
        for group in text.split(',') {
            let Some((kind, options)) = group.split_once(':') else {
                return Err(RuleError::MissingSeparator {
                    group: group.to_string(),
                });
            };
            let kind = kind.parse()?;
            let options: Vec<String> = options.split('|').map(str::to_string).collect();
            if options.iter().any(|o| o.is_empty()) {
                return Err(RuleError::EmptyOption {
                    group: group.to_string(),
                });
            }
            rules.push(Rule { kind, options });
        }
        Ok(Self { rules })
    }

    /// Check a value against the set: rules in parse order, true on the
    /// first hit. The empty set matches everything.
    pub fn matches(&self, value: &str) -> bool {
        if self.rules.is_empty() {
            return true;
        }
        let value = value.to_lowercase();
        self.rules.iter().any(|rule| rule.matches(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rule_matches_everything() {
        let rules = RuleSet::parse("").unwrap();
        assert!(rules.matches("anything"));
        assert!(rules.matches(""));
        assert!(RuleSet::parse("   ").unwrap().matches("id"));
    }

    #[test]
    fn test_starts_is_a_prefix_match() {
        let rules = RuleSet::parse("starts:user").unwrap();
        assert!(rules.matches("user_id"));
        assert!(rules.matches("user"));
        assert!(!rules.matches("power_user"));
    }

    // Regression: an option longer than the value must not match. The
    // generator this replaces used a position check that misbehaved here.
    #[test]
    fn test_starts_option_longer_than_value() {
        let rules = RuleSet::parse("starts:user_account").unwrap();
        assert!(!rules.matches("user"));
    }

    #[test]
    fn test_ends_is_a_suffix_match() {
        let rules = RuleSet::parse("ends:_at").unwrap();
        assert!(rules.matches("created_at"));
        assert!(rules.matches("updated_at"));
        assert!(!rules.matches("created_it"));
    }

    #[test]
    fn test_equals_is_exact() {
        let rules = RuleSet::parse("equals:id").unwrap();
        assert!(rules.matches("id"));
        assert!(!rules.matches("ids"));
    }

    #[test]
    fn test_matching_is_case_insensitive_on_value() {
        let rules = RuleSet::parse("ends:_at").unwrap();
        assert!(rules.matches("CREATED_AT"));
    }

    #[test]
    fn test_multiple_groups_any_match_wins() {
        let rules = RuleSet::parse("ends:_id|ids,equals:id").unwrap();
        assert!(rules.matches("user_id"));
        assert!(rules.matches("ids"));
        assert!(rules.matches("id"));
        assert!(!rules.matches("name"));
    }

    #[test]
    fn test_spaces_are_stripped() {
        let rules = RuleSet::parse("ends: _at, equals: id").unwrap();
        assert!(rules.matches("created_at"));
        assert!(rules.matches("id"));
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = RuleSet::parse("contains:_at").unwrap_err();
        assert!(matches!(err, RuleError::UnknownKind { kind } if kind == "contains"));
    }

    #[test]
    fn test_group_without_separator_is_an_error() {
        let err = RuleSet::parse("ends_at").unwrap_err();
        assert!(matches!(err, RuleError::MissingSeparator { .. }));
    }

    #[test]
    fn test_empty_option_is_an_error() {
        let err = RuleSet::parse("ends:_at|").unwrap_err();
        assert!(matches!(err, RuleError::EmptyOption { .. }));
    }
}
