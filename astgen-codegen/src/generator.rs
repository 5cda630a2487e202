use std::path::{Path, PathBuf};

use astgen_core::{File, FileRules, GeneratedFile, WriteResult, write_files};
use astgen_schema::Schema;
use eyre::Result;

use crate::{
    GeneratorOptions,
    files::{DeclarationsUnit, DefinitionsUnit},
};

/// A rendered unit that has not been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// One unit written by [`Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Result of writing both units.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Declarations unit first, then definitions unit
    pub files: Vec<WrittenFile>,
}

impl GenerateResult {
    /// Paths of the units whose content changed on disk.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|f| f.result == WriteResult::Written)
            .map(|f| f.path.as_path())
    }
}

/// C++ generator for a parsed schema.
pub struct Generator<'a> {
    schema: &'a Schema,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Render the declarations unit (`ast.h`).
    pub fn emit_declarations(&self) -> String {
        DeclarationsUnit::new(self.schema, &self.options).render()
    }

    /// Render the definitions unit (`ast.cpp`).
    pub fn emit_definitions(&self) -> String {
        DefinitionsUnit::new(self.schema, &self.options).render()
    }

    /// Render both units without writing to disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        vec![
            PreviewFile {
                path: self.options.header_name.clone(),
                content: self.emit_declarations(),
            },
            PreviewFile {
                path: self.options.source_name.clone(),
                content: self.emit_definitions(),
            },
        ]
    }

    /// Render both units, then write them under `output_dir`.
    ///
    /// Nothing is written until both units are rendered and staged, so a
    /// failed write never leaves a new header beside an old source.
    pub fn generate(&self, output_dir: &Path, rules: FileRules) -> Result<GenerateResult> {
        let declarations = DeclarationsUnit::new(self.schema, &self.options).with_rules(rules);
        let definitions = DefinitionsUnit::new(self.schema, &self.options).with_rules(rules);

        let pending = [
            File::new(declarations.path(output_dir), declarations.render())
                .with_rules(declarations.rules()),
            File::new(definitions.path(output_dir), definitions.render())
                .with_rules(definitions.rules()),
        ];
        tracing::debug!(
            output_dir = %output_dir.display(),
            nodes = self.schema.ast.len(),
            "rendered units"
        );

        let results = write_files(&pending)?;
        let files = pending
            .iter()
            .zip(results)
            .map(|(file, result)| WrittenFile {
                path: file.path().to_path_buf(),
                result,
            })
            .collect();
        Ok(GenerateResult { files })
    }
}
