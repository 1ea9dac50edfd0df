//! Per-table model generation.

use std::path::{Path, PathBuf};

use eyre::Result;
use modelgen_core::{GeneratedFile, Overwrite, PreviewFile, WriteResult, table_to_class_name};
use modelgen_schema::SchemaProvider;

use crate::{
    classify::{ClassifyRules, classify, custom_primary_key},
    getset::AccessorGenerator,
    render::{TokenMap, array_literal, bool_literal, render_tokens},
    stubs,
};

/// Tables a conventional application schema carries that are rarely worth
/// a model; skipped when `ignore_system` is set.
pub const SYSTEM_TABLES: &[&str] = &[
    "users",
    "permissions",
    "permission_role",
    "roles",
    "role_user",
    "migrations",
    "password_resets",
];

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Namespace of the generated classes
    pub namespace: String,
    /// Fully-qualified parent class
    pub extends: String,
    /// Restrict generation to these tables
    pub tables: Option<Vec<String>>,
    /// Tables to skip
    pub ignore: Vec<String>,
    /// Also skip the built-in system tables
    pub ignore_system: bool,
    /// Table name prefix stripped before class naming
    pub prefix: Option<String>,
    /// Overwrite existing model files
    pub force: bool,
    /// Generate accessor/mutator methods
    pub getset: bool,
    /// Custom class template replacing the built-in stub
    pub class_stub: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "App\\Models".to_string(),
            extends: "Illuminate\\Database\\Eloquent\\Model".to_string(),
            tables: None,
            ignore: Vec::new(),
            ignore_system: false,
            prefix: None,
            force: false,
            getset: false,
            class_stub: None,
        }
    }
}

/// A rendered model source file
pub struct ModelFile {
    pub table: String,
    pub class_name: String,
    content: String,
    force: bool,
}

impl GeneratedFile for ModelFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.{}", self.class_name, stubs::FILE_EXTENSION))
    }

    fn overwrite(&self) -> Overwrite {
        if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        }
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// What happened to one table during a run
#[derive(Debug)]
pub enum TableOutcome {
    /// Model file written
    Written { table: String, path: PathBuf },
    /// Model file already exists and force is off
    SkippedExists { table: String, path: PathBuf },
    /// Table is on an ignore list
    Ignored { table: String },
}

/// Drives classification and rendering for every table of a provider.
pub struct ModelGenerator<'a, P: SchemaProvider> {
    provider: &'a P,
    rules: ClassifyRules,
    config: GeneratorConfig,
}

impl<'a, P: SchemaProvider> ModelGenerator<'a, P> {
    pub fn new(provider: &'a P, rules: ClassifyRules, config: GeneratorConfig) -> Self {
        Self {
            provider,
            rules,
            config,
        }
    }

    /// Render every model without touching disk.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let mut files = Vec::new();
        for table in self.provider.table_names(self.config.tables.as_deref()) {
            if self.is_ignored(&table) {
                continue;
            }
            let model = self.build_model(&table)?;
            files.push(PreviewFile {
                path: format!("{}.{}", model.class_name, stubs::FILE_EXTENSION),
                content: model.content,
            });
        }
        Ok(files)
    }

    /// Generate model files into the output directory.
    ///
    /// Ignored tables and existing files are reported as outcomes, not
    /// errors; only provider and I/O failures abort the run.
    pub fn generate(&self, output_dir: &Path) -> Result<Vec<TableOutcome>> {
        let mut outcomes = Vec::new();
        for table in self.provider.table_names(self.config.tables.as_deref()) {
            if self.is_ignored(&table) {
                outcomes.push(TableOutcome::Ignored { table });
                continue;
            }

            let model = self.build_model(&table)?;
            let path = model.path(output_dir);
            let outcome = match model.write(output_dir)? {
                WriteResult::Written => TableOutcome::Written { table, path },
                WriteResult::Skipped => TableOutcome::SkippedExists { table, path },
            };
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    fn is_ignored(&self, table: &str) -> bool {
        self.config.ignore.iter().any(|t| t == table)
            || (self.config.ignore_system && SYSTEM_TABLES.contains(&table))
    }

    fn build_model(&self, table: &str) -> Result<ModelFile> {
        let columns = self.provider.columns(table)?;
        let primary_key = self.provider.primary_key(table)?;

        let buckets = classify(&columns, &self.rules, primary_key.as_deref());
        let class_name = table_to_class_name(table, self.config.prefix.as_deref());

        let extends = self.config.extends.as_str();
        let extends_short = extends.rsplit('\\').next().unwrap_or(extends);

        let mut tokens = TokenMap::new();
        tokens.insert("class", class_name.as_str());
        tokens.insert("namespace", self.config.namespace.as_str());
        tokens.insert("extends", extends);
        tokens.insert("extends_short", extends_short);
        tokens.insert("table", table);
        // the primary key declaration collapses to nothing for the
        // default `id` key, trailing spacing included
        tokens.insert(
            "primary_key",
            match custom_primary_key(primary_key.as_deref()) {
                Some(key) => format!("protected $primaryKey = '{key}';\n\n    "),
                None => String::new(),
            },
        );
        tokens.insert("fillable", array_literal(&buckets.fillable));
        tokens.insert("guarded", array_literal(&buckets.guarded));
        tokens.insert("timestamps", bool_literal(buckets.timestamps));

        if self.config.getset {
            let accessors = AccessorGenerator::new(stubs::GETTER_STUB, stubs::SETTER_STUB);
            // fillable attributes get both methods, guarded ones a getter only
            let mut getters = accessors.getters(&buckets.fillable);
            getters.push_str(&accessors.getters(&buckets.guarded));
            tokens.insert("getters", getters);
            tokens.insert("setters", accessors.setters(&buckets.fillable));
        } else {
            tokens.remove_block("getters");
            tokens.remove_block("setters");
        }

        let stub = self
            .config
            .class_stub
            .as_deref()
            .unwrap_or(stubs::MODEL_STUB);

        Ok(ModelFile {
            table: table.to_string(),
            class_name,
            content: render_tokens(stub, &tokens),
            force: self.config.force,
        })
    }
}
