// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Schema snapshot types and loading for modelgen.
//!
//! A snapshot is a TOML file describing the tables of a relational
//! database: column names and types in table order, plus the primary key
//! when the introspection tool that produced the snapshot found one.
//! Snapshots are read-only inputs; modelgen never connects to a live
//! database.

mod error;
mod parse;
mod provider;

use indexmap::IndexMap;
pub use error::{Error, Result};
pub use provider::SchemaProvider;
use serde::Deserialize;

/// Root schema snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// Tables in snapshot order
    #[serde(default)]
    pub tables: IndexMap<String, Table>,
}

/// A table description
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    /// Primary key column name, if the table has one
    #[serde(default)]
    pub primary_key: Option<String>,

    /// Columns in table order
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A column description
#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    /// Column name as reported by the database
    pub name: String,

    /// Database data type (e.g., "varchar", "bigint")
    #[serde(default, rename = "type")]
    pub data_type: Option<String>,
}

impl Schema {
    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::unknown_table(name))
    }
}
