//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,

    /// Namespace wrapping the generated code.
    pub namespace: String,

    /// Number of top-level nodes.
    pub node_count: usize,

    /// Formatter warnings.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Declarations unit first.
    pub units: Vec<UnitStatus>,
    /// Name of the formatter that ran, if any.
    pub formatter: Option<String>,
}

#[derive(Debug)]
pub struct UnitStatus {
    pub path: PathBuf,
    /// False when the file already held identical content.
    pub changed: bool,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.key_value("Schema", &self.schema_path.display().to_string());
        out.key_value("Namespace", &self.namespace);
        out.key_value("Top-level nodes", &self.node_count.to_string());
        out.newline();

        out.section(&format!("Generated ({})", written.output_dir.display()));
        for unit in &written.units {
            let path = unit.path.display().to_string();
            if unit.changed {
                out.added_item(&path);
            } else {
                out.unchanged_item(&path);
            }
        }

        if let Some(formatter) = &written.formatter {
            out.newline();
            out.key_value("Formatted with", formatter);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
