use std::path::{Path, PathBuf};

use astgen_core::{FileRules, GeneratedFile};
use astgen_schema::Schema;

use super::{push_banner, push_namespace};
use crate::{
    GeneratorOptions,
    builder::CodeBuilder,
    decls::{emit_declaration, emit_forward_declaration},
    equality::{self, Comparison},
    printer::emit_printer,
};

/// The header unit: types, comparison prototypes and printer code.
pub struct DeclarationsUnit<'a> {
    schema: &'a Schema,
    options: &'a GeneratorOptions,
    rules: FileRules,
}

impl<'a> DeclarationsUnit<'a> {
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

impl GeneratedFile for DeclarationsUnit<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.options.header_name)
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        let schema = self.schema;
        let mut builder = CodeBuilder::new(self.options.indent);
        push_banner(&mut builder);

        builder.push_line("#pragma once").push_blank();
        for include in &schema.sys_includes {
            builder.push_line(&format!("#include <{include}>"));
        }
        builder.push_blank();
        for include in &schema.project_includes {
            builder.push_line(&format!("#include \"{include}\""));
        }
        builder.push_blank();

        push_namespace(&mut builder, &schema.namespace, |b| {
            for node in &schema.ast {
                emit_forward_declaration(b, node);
            }
            for node in &schema.ast {
                emit_declaration(b, node);
            }
            for op in Comparison::ALL {
                equality::emit_forward_declarations(b, &schema.ast, op);
            }
            emit_printer(b, &schema.printer, &schema.ast);
        });

        builder.build()
    }
}
