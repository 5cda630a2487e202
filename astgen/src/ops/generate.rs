//! Generate operation - C++ units from a schema.

use std::path::Path;

use astgen_codegen::{Generator, GeneratorOptions};
use astgen_core::{FileRules, SourceFormatter, WriteResult};
use astgen_schema::SchemaFile;
use eyre::{Context, Result};

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, UnitStatus, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving the generated units.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Formatter applied to each written unit.
    pub formatter: Option<&'a dyn SourceFormatter>,
    pub codegen: GeneratorOptions,
}

/// Execute the generate operation.
///
/// Both units are rendered before anything is written. Formatter failures
/// become warnings; the unformatted units stay on disk.
pub fn generate(schema_file: &SchemaFile, opts: GenerateOptions) -> Result<GenerateReport> {
    let schema = schema_file.schema();
    let generator = Generator::new(schema).with_options(opts.codegen);
    let mut warnings = Vec::new();

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        // Formatting rewrites the files, so comparing against fresh output is meaningless
        let rules = if opts.formatter.is_some() {
            FileRules::always_overwrite()
        } else {
            FileRules::if_changed()
        };

        let generated = generator
            .generate(opts.output_dir, rules)
            .wrap_err("Failed to generate code")?;

        if let Some(formatter) = opts.formatter {
            for path in generated.written() {
                if let Err(e) = formatter.format(path) {
                    tracing::warn!(path = %path.display(), error = %e, "formatter failed");
                    warnings.push(format!(
                        "{} failed on {}: {}",
                        formatter.name(),
                        path.display(),
                        e
                    ));
                }
            }
        }

        let units = generated
            .files
            .iter()
            .map(|f| UnitStatus {
                path: f.path.clone(),
                changed: f.result == WriteResult::Written,
            })
            .collect();

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            units,
            formatter: opts.formatter.map(|f| f.name().to_string()),
        })
    };

    Ok(GenerateReport {
        schema_path: schema_file.path().to_path_buf(),
        namespace: schema.namespace.clone(),
        node_count: schema.ast.len(),
        warnings,
        result,
    })
}
