use std::path::PathBuf;

use astgen_codegen::{DEFAULT_HEADER_NAME, DEFAULT_SOURCE_NAME, GeneratorOptions, builder::Indent};
use astgen_core::{ClangFormat, SourceFormatter};
use astgen_schema::SchemaFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the AST schema (.json, or .toml)
    #[arg(short, long, aliases = ["schema-file", "schema_file"])]
    pub schema: PathBuf,

    /// Directory receiving the generated units
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// clang-format executable
    #[arg(long, default_value = "clang-format")]
    pub clang_format_path: PathBuf,

    /// Style file for clang-format; formatting is skipped without it
    #[arg(short = 'c', long)]
    pub clang_format_config: Option<PathBuf>,

    /// File name of the declarations unit
    #[arg(long, default_value = DEFAULT_HEADER_NAME)]
    pub header_name: String,

    /// File name of the definitions unit
    #[arg(long, default_value = DEFAULT_SOURCE_NAME)]
    pub source_name: String,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub indent_width: u8,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let schema_file = SchemaFile::open(&self.schema).unwrap_or_exit();

        let formatter = self
            .clang_format_config
            .as_ref()
            .map(|config| ClangFormat::new(&self.clang_format_path, config));

        let report = ops::generate(
            &schema_file,
            ops::generate::GenerateOptions {
                output_dir: &self.output_dir,
                dry_run: self.dry_run,
                formatter: formatter.as_ref().map(|f| f as &dyn SourceFormatter),
                codegen: self.codegen_options(),
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn codegen_options(&self) -> GeneratorOptions {
        GeneratorOptions::default()
            .with_indent(Indent::Spaces(self.indent_width))
            .with_header_name(&self.header_name)
            .with_source_name(&self.source_name)
    }
}
