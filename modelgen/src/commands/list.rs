use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelgen_schema::Schema;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to the schema snapshot (defaults to ./schema.toml)
    #[arg(long, default_value = "schema.toml")]
    pub schema: PathBuf,

    /// Also list the columns of every table
    #[arg(short, long)]
    pub columns: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();

        if schema.tables.is_empty() {
            println!("No tables in snapshot");
            return Ok(());
        }

        println!("Tables:");
        for (name, table) in &schema.tables {
            match &table.primary_key {
                Some(pk) => println!(
                    "  {} ({} columns, primary key: {})",
                    name,
                    table.columns.len(),
                    pk
                ),
                None => println!("  {} ({} columns)", name, table.columns.len()),
            }

            if self.columns {
                for column in &table.columns {
                    match &column.data_type {
                        Some(ty) => println!("    {} ({})", column.name, ty),
                        None => println!("    {}", column.name),
                    }
                }
            }
        }

        Ok(())
    }
}
