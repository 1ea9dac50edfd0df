use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelgen_codegen::{
    ClassifyRules, DEFAULT_FILLABLE_RULE, DEFAULT_GUARDED_RULE, DEFAULT_TIMESTAMP_RULE,
};
use modelgen_schema::Schema;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema snapshot (defaults to ./schema.toml)
    #[arg(long, default_value = "schema.toml")]
    pub schema: PathBuf,

    /// Rules for fillable columns (empty matches every column)
    #[arg(long, default_value = DEFAULT_FILLABLE_RULE)]
    pub fillable: String,

    /// Rules for guarded columns
    #[arg(long, default_value = DEFAULT_GUARDED_RULE)]
    pub guarded: String,

    /// Rules for the timestamps flag
    #[arg(long, default_value = DEFAULT_TIMESTAMP_RULE)]
    pub timestamps: String,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();
        ClassifyRules::parse(&self.fillable, &self.guarded, &self.timestamps).unwrap_or_exit();

        println!("✓ {} is valid\n", self.schema.display());

        let table_count = schema.tables.len();
        println!(
            "  {} table{}:",
            table_count,
            if table_count == 1 { "" } else { "s" }
        );
        for name in schema.tables.keys() {
            println!("    {}", name);
        }

        Ok(())
    }
}
