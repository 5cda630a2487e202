use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use tempfile::NamedTempFile;

/// Trait for types that represent a generated output unit
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render())
            .with_rules(self.rules())
            .write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Write a set of files so that a failure leaves every target untouched.
///
/// Changed content is staged to a temporary file beside each target first.
/// Targets are replaced by renaming only after every file has been staged;
/// staged files are removed when staging fails part way.
pub fn write_files(files: &[File]) -> Result<Vec<WriteResult>> {
    let mut staged = Vec::with_capacity(files.len());
    for file in files {
        if file.is_unchanged() {
            tracing::debug!(path = %file.path.display(), "content unchanged, skipping");
            staged.push(None);
        } else {
            staged.push(Some(file.stage()?));
        }
    }

    let mut results = Vec::with_capacity(files.len());
    for (file, temp) in files.iter().zip(staged) {
        let Some(temp) = temp else {
            results.push(WriteResult::Unchanged);
            continue;
        };
        temp.persist(&file.path)
            .map_err(|e| e.error)
            .wrap_err_with(|| format!("failed to replace '{}'", file.path.display()))?;
        tracing::debug!(path = %file.path.display(), bytes = file.content.len(), "wrote file");
        results.push(WriteResult::Written);
    }
    Ok(results)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the exact content and was left untouched
    Unchanged,
}

/// A file to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        if self.is_unchanged() {
            tracing::debug!(path = %self.path.display(), "content unchanged, skipping");
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }

    /// `IfChanged` file whose target already holds the exact content.
    fn is_unchanged(&self) -> bool {
        match self.rules.overwrite {
            Overwrite::Always => false,
            Overwrite::IfChanged => std::fs::read_to_string(&self.path)
                .map(|existing| existing == self.content)
                .unwrap_or(false),
        }
    }

    /// Write the content to a temporary file in the target's directory.
    fn stage(&self) -> Result<NamedTempFile> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;

        let mut temp = NamedTempFile::new_in(parent)
            .wrap_err_with(|| format!("failed to stage '{}'", self.path.display()))?;
        temp.write_all(self.content.as_bytes())
            .wrap_err_with(|| format!("failed to stage '{}'", self.path.display()))?;
        Ok(temp)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Always rewrite the file.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Rewrite the file only when its content differs.
    ///
    /// Keeps modification times stable so build systems don't recompile
    /// everything that includes an unchanged generated header.
    pub fn if_changed() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite
    #[default]
    Always,
    /// Only write if missing or different
    IfChanged,
}
