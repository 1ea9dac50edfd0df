//! Rule matching, column classification, and template rendering for the
//! modelgen model generator.

mod classify;
mod generator;
mod getset;
mod render;
mod rules;

pub mod stubs;

pub use classify::{
    ClassifyRules, DEFAULT_FILLABLE_RULE, DEFAULT_GUARDED_RULE, DEFAULT_PRIMARY_KEY,
    DEFAULT_TIMESTAMP_RULE, PropertyBuckets, classify, custom_primary_key,
};
pub use generator::{GeneratorConfig, ModelFile, ModelGenerator, SYSTEM_TABLES, TableOutcome};
pub use getset::AccessorGenerator;
pub use render::{TokenMap, array_literal, bool_literal, render_tokens};
pub use rules::{Rule, RuleError, RuleKind, RuleSet};
