//! Column classification into model property buckets.

use modelgen_schema::Column;

use crate::rules::{RuleError, RuleSet};

/// Default rule strings, matching the conventional Laravel column layout.
pub const DEFAULT_FILLABLE_RULE: &str = "";
pub const DEFAULT_GUARDED_RULE: &str = "ends:_guarded";
pub const DEFAULT_TIMESTAMP_RULE: &str = "ends:_at";

/// The primary key name that needs no declaration in the generated model.
pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Column names never considered fillable, on top of the primary key.
const FILLABLE_EXCLUDES: [&str; 4] = ["id", "created_at", "updated_at", "deleted_at"];

/// The three pre-parsed rule sets driving classification.
///
/// Constructing this is where malformed rule strings surface, before any
/// table is processed.
#[derive(Debug, Clone)]
pub struct ClassifyRules {
    pub fillable: RuleSet,
    pub guarded: RuleSet,
    pub timestamps: RuleSet,
}

impl ClassifyRules {
    pub fn parse(fillable: &str, guarded: &str, timestamps: &str) -> Result<Self, RuleError> {
        Ok(Self {
            fillable: RuleSet::parse(fillable)?,
            guarded: RuleSet::parse(guarded)?,
            timestamps: RuleSet::parse(timestamps)?,
        })
    }
}

/// Per-table property buckets, derived once and discarded after rendering.
#[derive(Debug, Clone, Default)]
pub struct PropertyBuckets {
    /// Columns safe for mass assignment, in column order
    pub fillable: Vec<String>,
    /// Reserved; always empty in the current design
    pub guarded: Vec<String>,
    /// Whether the table carries automatic timestamp columns
    pub timestamps: bool,
}

/// Strip the default `id` primary key; only a custom key is declared in
/// the model and joins the fillable exclusion set.
pub fn custom_primary_key(primary_key: Option<&str>) -> Option<&str> {
    primary_key.filter(|key| *key != DEFAULT_PRIMARY_KEY)
}

/// Classify columns into property buckets.
///
/// Guarded-rule matches are promoted into fillable with no exclusion
/// filter applied; the guarded bucket itself stays empty. The output
/// order follows column order and nothing is de-duplicated.
pub fn classify(
    columns: &[Column],
    rules: &ClassifyRules,
    primary_key: Option<&str>,
) -> PropertyBuckets {
    let primary_key = custom_primary_key(primary_key);

    let mut buckets = PropertyBuckets::default();
    for column in columns {
        let name = column.name.as_str();

        if rules.fillable.matches(name) {
            let excluded =
                FILLABLE_EXCLUDES.contains(&name) || primary_key.is_some_and(|key| key == name);
            if !excluded {
                buckets.fillable.push(name.to_string());
            }
        }
        if rules.guarded.matches(name) {
            buckets.fillable.push(name.to_string());
        }
        if rules.timestamps.matches(name) {
            buckets.timestamps = true;
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<Column> {
        names
            .iter()
            .map(|name| Column {
                name: name.to_string(),
                data_type: None,
            })
            .collect()
    }

    fn default_rules() -> ClassifyRules {
        ClassifyRules::parse(
            DEFAULT_FILLABLE_RULE,
            DEFAULT_GUARDED_RULE,
            DEFAULT_TIMESTAMP_RULE,
        )
        .unwrap()
    }

    #[test]
    fn test_default_rules_exclude_bookkeeping_columns() {
        let buckets = classify(
            &columns(&["id", "name", "created_at"]),
            &default_rules(),
            None,
        );

        assert_eq!(buckets.fillable, ["name"]);
        assert!(buckets.guarded.is_empty());
        assert!(buckets.timestamps);
    }

    #[test]
    fn test_custom_primary_key_is_excluded() {
        let buckets = classify(
            &columns(&["invoice_id", "amount"]),
            &default_rules(),
            Some("invoice_id"),
        );

        assert_eq!(buckets.fillable, ["amount"]);
        assert!(!buckets.timestamps);
    }

    #[test]
    fn test_default_id_primary_key_is_already_excluded() {
        let buckets = classify(&columns(&["id", "amount"]), &default_rules(), Some("id"));
        assert_eq!(buckets.fillable, ["amount"]);
    }

    #[test]
    fn test_guarded_match_is_promoted_without_exclusion() {
        let rules = ClassifyRules::parse("equals:title", "ends:_guarded", "ends:_at").unwrap();
        let buckets = classify(&columns(&["title", "secret_guarded", "id"]), &rules, None);

        assert_eq!(buckets.fillable, ["title", "secret_guarded"]);
        assert!(buckets.guarded.is_empty());
    }

    #[test]
    fn test_timestamps_flag_is_sticky() {
        let buckets = classify(
            &columns(&["created_at", "name", "other"]),
            &default_rules(),
            None,
        );
        assert!(buckets.timestamps);
    }

    #[test]
    fn test_fillable_preserves_column_order() {
        let buckets = classify(
            &columns(&["zeta", "alpha", "mid"]),
            &default_rules(),
            None,
        );
        assert_eq!(buckets.fillable, ["zeta", "alpha", "mid"]);
    }
}
