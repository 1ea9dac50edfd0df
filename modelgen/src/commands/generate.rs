use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use modelgen_codegen::{
    ClassifyRules, DEFAULT_FILLABLE_RULE, DEFAULT_GUARDED_RULE, DEFAULT_TIMESTAMP_RULE,
    GeneratorConfig, ModelGenerator, TableOutcome,
};
use modelgen_schema::Schema;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the schema snapshot (defaults to ./schema.toml)
    #[arg(long, default_value = "schema.toml")]
    pub schema: PathBuf,

    /// Output directory for the generated model files
    #[arg(short, long, default_value = "app/Models")]
    pub output: PathBuf,

    /// Namespace of the generated classes
    #[arg(long, default_value = "App\\Models")]
    pub namespace: String,

    /// Fully-qualified parent class of the generated models
    #[arg(long, default_value = "Illuminate\\Database\\Eloquent\\Model")]
    pub extends: String,

    /// Rules for fillable columns (empty matches every column)
    #[arg(long, default_value = DEFAULT_FILLABLE_RULE)]
    pub fillable: String,

    /// Rules for guarded columns
    #[arg(long, default_value = DEFAULT_GUARDED_RULE)]
    pub guarded: String,

    /// Rules for the timestamps flag
    #[arg(long, default_value = DEFAULT_TIMESTAMP_RULE)]
    pub timestamps: String,

    /// Comma-separated table names to generate
    #[arg(long, value_delimiter = ',')]
    pub tables: Option<Vec<String>>,

    /// Comma-separated table names to skip
    #[arg(short, long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Also skip the built-in system tables
    #[arg(short = 's', long)]
    pub ignore_system: bool,

    /// Table name prefix stripped before class naming
    #[arg(long)]
    pub prefix: Option<String>,

    /// Overwrite existing model files
    #[arg(short, long)]
    pub force: bool,

    /// Generate accessor and mutator methods
    #[arg(short = 'm', long)]
    pub getset: bool,

    /// Custom class template file replacing the built-in stub
    #[arg(long)]
    pub stub: Option<PathBuf>,

    /// Preview generated models without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();

        // A malformed rule string is a misconfiguration: fail before any
        // table is touched.
        let rules = ClassifyRules::parse(&self.fillable, &self.guarded, &self.timestamps)
            .unwrap_or_exit();

        let class_stub = match &self.stub {
            Some(path) => Some(std::fs::read_to_string(path).wrap_err_with(|| {
                format!("Failed to read class template '{}'", path.display())
            })?),
            None => None,
        };

        let config = GeneratorConfig {
            namespace: self.namespace.clone(),
            extends: self.extends.clone(),
            tables: self.tables.clone(),
            ignore: self.ignore.clone(),
            ignore_system: self.ignore_system,
            prefix: self.prefix.clone(),
            force: self.force,
            getset: self.getset,
            class_stub,
        };
        let generator = ModelGenerator::new(&schema, rules, config);

        if self.dry_run {
            return self.run_preview(&generator);
        }

        let outcomes = generator
            .generate(&self.output)
            .wrap_err("Failed to generate models")?;

        let mut written = 0;
        for outcome in &outcomes {
            match outcome {
                TableOutcome::Written { path, .. } => {
                    written += 1;
                    println!("  + {}", path.display());
                }
                TableOutcome::SkippedExists { table, path } => {
                    eprintln!(
                        "  ! {} already exists, skipping {} (use --force to overwrite)",
                        path.display(),
                        table
                    );
                }
                TableOutcome::Ignored { table } => {
                    println!("  - {} is ignored", table);
                }
            }
        }

        println!();
        println!(
            "{} model{} written to {}",
            written,
            if written == 1 { "" } else { "s" },
            self.output.display()
        );

        Ok(())
    }

    fn run_preview(&self, generator: &ModelGenerator<'_, Schema>) -> Result<()> {
        let files = generator.preview().wrap_err("Failed to render models")?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
