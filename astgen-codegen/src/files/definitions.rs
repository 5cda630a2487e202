use std::path::{Path, PathBuf};

use astgen_core::{FileRules, GeneratedFile};
use astgen_schema::Schema;

use super::{push_banner, push_namespace};
use crate::{
    GeneratorOptions,
    builder::CodeBuilder,
    equality::{self, Comparison},
};

/// The source unit: comparison operator bodies.
pub struct DefinitionsUnit<'a> {
    schema: &'a Schema,
    options: &'a GeneratorOptions,
    rules: FileRules,
}

impl<'a> DefinitionsUnit<'a> {
    pub fn new(schema: &'a Schema, options: &'a GeneratorOptions) -> Self {
        Self {
            schema,
            options,
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }
}

impl GeneratedFile for DefinitionsUnit<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.options.source_name)
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::new(self.options.indent);
        push_banner(&mut builder);

        builder
            .push_line(&format!("#include \"{}\"", self.options.header_name))
            .push_blank();

        push_namespace(&mut builder, &self.schema.namespace, |b| {
            for op in Comparison::ALL {
                equality::emit_definitions(b, &self.schema.ast, op);
            }
        });

        builder.build()
    }
}
