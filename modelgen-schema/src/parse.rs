//! Snapshot parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, Result, Schema};

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.toml")
    }
}

impl Schema {
    /// Parse a schema snapshot from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(&content, &path.display().to_string())
    }

    /// Parse a snapshot from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_schema(content, filename)
    }
}

/// Parse a snapshot from content with the given filename for error reporting.
fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    let schema: Schema =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_schema(&schema, content, filename)?;
    Ok(schema)
}

/// Validate the snapshot after parsing.
fn validate_schema(schema: &Schema, src: &str, filename: &str) -> Result<()> {
    for (name, table) in &schema.tables {
        let mut seen = std::collections::HashSet::new();
        for column in &table.columns {
            if column.name.is_empty() {
                return Err(Error::validation(
                    format!("table '{name}' has a column with an empty name"),
                    src,
                    filename,
                ));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(Error::validation(
                    format!("table '{name}' lists column '{}' twice", column.name),
                    src,
                    filename,
                ));
            }
        }

        if let Some(pk) = &table.primary_key
            && !table.columns.iter().any(|c| &c.name == pk)
        {
            return Err(Error::validation(
                format!("table '{name}' declares primary key '{pk}' but has no such column"),
                src,
                filename,
            ));
        }
    }
    Ok(())
}
