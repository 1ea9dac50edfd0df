use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated model source file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the overwrite policy for this file
    fn overwrite(&self) -> Overwrite;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.overwrite() {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (force mode)
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

/// A rendered file for preview output
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from the output directory
    pub path: String,
    /// File content
    pub content: String,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixture {
        name: String,
        content: String,
        overwrite: Overwrite,
    }

    impl GeneratedFile for Fixture {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(&self.name)
        }

        fn overwrite(&self) -> Overwrite {
            self.overwrite
        }

        fn render(&self) -> String {
            self.content.clone()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app").join("Models").join("User.php");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("User.php");

        fs::write(&path, "original").unwrap();

        let file = Fixture {
            name: "User.php".to_string(),
            content: "updated".to_string(),
            overwrite: Overwrite::Always,
        };
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("User.php");

        let file = Fixture {
            name: "User.php".to_string(),
            content: "new content".to_string(),
            overwrite: Overwrite::IfMissing,
        };
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("User.php");

        fs::write(&path, "original").unwrap();

        let file = Fixture {
            name: "User.php".to_string(),
            content: "should not write".to_string(),
            overwrite: Overwrite::IfMissing,
        };
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}
