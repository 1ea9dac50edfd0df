//! Core utilities for the modelgen model generator.
//!
//! This crate provides the file-writing primitives and the string
//! conversions shared across the modelgen workspace.

mod file;
mod naming;

// File operations
pub use file::{GeneratedFile, Overwrite, PreviewFile, WriteResult};
// String utilities
pub use naming::{attribute_to_method, singularize, table_to_class_name, to_pascal_case};
