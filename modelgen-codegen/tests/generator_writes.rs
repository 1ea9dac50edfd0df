//! Integration tests for the write/skip behavior of a generation run.

use std::{fs, str::FromStr};

use modelgen_codegen::{
    ClassifyRules, DEFAULT_FILLABLE_RULE, DEFAULT_GUARDED_RULE, DEFAULT_TIMESTAMP_RULE,
    GeneratorConfig, ModelGenerator, TableOutcome,
};
use modelgen_schema::Schema;
use tempfile::TempDir;

fn snapshot() -> Schema {
    Schema::from_str(
        r#"
        [tables.user_accounts]
        columns = [
            { name = "id" },
            { name = "user_name" },
            { name = "created_at" },
        ]

        [tables.orders]
        columns = [{ name = "id" }, { name = "total" }]
        "#,
    )
    .unwrap()
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
fn test_generate_writes_one_file_per_table() {
    let temp = TempDir::new().unwrap();
    let schema = snapshot();
    let generator = ModelGenerator::new(&schema, default_rules(), GeneratorConfig::default());

    let outcomes = generator.generate(temp.path()).unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(
        outcomes
            .iter()
            .all(|o| matches!(o, TableOutcome::Written { .. }))
    );
    assert!(temp.path().join("UserAccount.php").exists());
    assert!(temp.path().join("Order.php").exists());

    let content = fs::read_to_string(temp.path().join("UserAccount.php")).unwrap();
    assert!(content.contains("class UserAccount extends Model"));
}

#[test]
fn test_existing_file_is_skipped_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("UserAccount.php"), "hand-edited").unwrap();

    let schema = snapshot();
    let generator = ModelGenerator::new(&schema, default_rules(), GeneratorConfig::default());

    let outcomes = generator.generate(temp.path()).unwrap();

    assert!(matches!(
        &outcomes[0],
        TableOutcome::SkippedExists { table, .. } if table == "user_accounts"
    ));
    // the skip must not abort the rest of the run
    assert!(matches!(&outcomes[1], TableOutcome::Written { .. }));
    assert_eq!(
        fs::read_to_string(temp.path().join("UserAccount.php")).unwrap(),
        "hand-edited"
    );
}

#[test]
fn test_force_overwrites_existing_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("UserAccount.php"), "hand-edited").unwrap();

    let schema = snapshot();
    let config = GeneratorConfig {
        force: true,
        ..GeneratorConfig::default()
    };
    let generator = ModelGenerator::new(&schema, default_rules(), config);

    let outcomes = generator.generate(temp.path()).unwrap();

    assert!(matches!(&outcomes[0], TableOutcome::Written { .. }));
    let content = fs::read_to_string(temp.path().join("UserAccount.php")).unwrap();
    assert!(content.contains("protected $table = 'user_accounts';"));
}

#[test]
fn test_output_directory_is_created() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("app").join("Models");

    let schema = snapshot();
    let generator = ModelGenerator::new(&schema, default_rules(), GeneratorConfig::default());

    generator.generate(&nested).unwrap();
    assert!(nested.join("Order.php").exists());
}
