//! External source formatter invocation.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

/// Error from running an external formatter.
#[derive(Debug)]
pub struct FormatError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.output.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for tools that reformat a generated file in place.
pub trait SourceFormatter {
    /// Human readable name of the tool, used in reports.
    fn name(&self) -> &str;

    /// Format the file at `path` in place.
    fn format(&self, path: &Path) -> Result<(), FormatError>;
}

/// `clang-format` driven by a style configuration file.
#[derive(Debug, Clone)]
pub struct ClangFormat {
    executable: PathBuf,
    config: PathBuf,
}

impl ClangFormat {
    /// Create a formatter using the given executable and style file.
    pub fn new(executable: impl Into<PathBuf>, config: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            config: config.into(),
        }
    }

    /// Arguments passed to the executable for formatting `path`.
    pub fn args(&self, path: &Path) -> Vec<OsString> {
        let mut style = OsString::from("--style=file:");
        style.push(self.config.as_os_str());
        vec![style, OsString::from("-i"), path.as_os_str().to_owned()]
    }
}

impl SourceFormatter for ClangFormat {
    fn name(&self) -> &str {
        "clang-format"
    }

    fn format(&self, path: &Path) -> Result<(), FormatError> {
        tracing::debug!(
            executable = %self.executable.display(),
            config = %self.config.display(),
            path = %path.display(),
            "running formatter"
        );

        let output = Command::new(&self.executable)
            .args(self.args(path))
            .output()
            .map_err(|e| FormatError {
                message: format!("failed to run {}: {}", self.executable.display(), e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(FormatError {
                message: format!(
                    "{} exited with {} while formatting '{}'",
                    self.name(),
                    output.status,
                    path.display()
                ),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}
