use std::path::PathBuf;

use astgen_schema::SchemaFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the AST schema (.json, or .toml)
    #[arg(short, long)]
    pub schema: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema_file = SchemaFile::open(&self.schema).unwrap_or_exit();

        let report = ops::check(&schema_file);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
