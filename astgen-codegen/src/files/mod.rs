//! The two generated output units.

mod declarations;
mod definitions;

pub use declarations::DeclarationsUnit;
pub use definitions::DefinitionsUnit;

use crate::builder::CodeBuilder;

/// Header written at the top of every generated unit.
pub const BANNER: &[&str] = &[
    "// This file is generated by `astgen`.",
    "// DO NOT EDIT BY HAND!",
    "//",
    "// Note: any modifications to the AST should be",
    "// done by changing the AST schema file and",
    "// regenerating the sources.",
];

fn push_banner(builder: &mut CodeBuilder) {
    builder.push_lines(BANNER).push_blank();
}

/// Open `namespace`, emit `f` one level deeper, then close it.
fn push_namespace<F>(builder: &mut CodeBuilder, namespace: &str, f: F)
where
    F: FnOnce(&mut CodeBuilder),
{
    builder
        .push_line(&format!("namespace {namespace} {{"))
        .push_blank()
        .push_indented(f)
        .push_blank()
        .push_line("}");
}
