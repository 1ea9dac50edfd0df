//! The metadata interface the generator consumes.

use crate::{Column, Result, Schema};

/// Source of table metadata for model generation.
///
/// A loaded [`Schema`] snapshot is the stock implementation; tests supply
/// their own.
pub trait SchemaProvider {
    /// Table names in snapshot order, optionally restricted to an allowlist.
    fn table_names(&self, allow: Option<&[String]>) -> Vec<String>;

    /// Columns of a table, in table order.
    fn columns(&self, table: &str) -> Result<Vec<Column>>;

    /// Primary key column of a table, if any.
    fn primary_key(&self, table: &str) -> Result<Option<String>>;
}

impl SchemaProvider for Schema {
    fn table_names(&self, allow: Option<&[String]>) -> Vec<String> {
        self.tables
            .keys()
            .filter(|name| match allow {
                Some(allow) => allow.iter().any(|a| a == *name),
                None => true,
            })
            .cloned()
            .collect()
    }

    fn columns(&self, table: &str) -> Result<Vec<Column>> {
        Ok(self.table(table)?.columns.clone())
    }

    fn primary_key(&self, table: &str) -> Result<Option<String>> {
        Ok(self.table(table)?.primary_key.clone())
    }
}
