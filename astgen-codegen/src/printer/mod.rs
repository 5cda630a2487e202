//! Pretty-printer generation from the schema's printer templates.
//!
//! The node tree is flattened into [`PrinterNodeInfo`]s (pre-order), each
//! node compiles one `declaration` fragment and one definition fragment,
//! and the results are spliced into the `template` skeleton.

pub mod template;

use astgen_schema::{Node, PrinterSchema};

use self::template::{
    FIELD_NAME, NAME, TYPE, VARIANT, expand_marker, expand_markers, substitute,
};
use crate::{builder::CodeBuilder, type_path::TypePath};

/// Marker in `template` replaced by all declaration fragments.
pub const DECLARATIONS_MARKER: &str = "declarations";
/// Marker in `template` replaced by all definition fragments.
pub const DEFINITIONS_MARKER: &str = "definitions";
/// Marker in `definition` replaced by the per-field fragments.
pub const FIELDS_MARKER: &str = "fields";
/// Marker in `definition_enum` replaced by the per-element fragments.
pub const ENUM_CASES_MARKER: &str = "definition_enum_cases";

/// Flattened view of one node for template compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterNodeInfo<'a> {
    /// Fully-qualified type path, e.g. `Expr::Binary`
    pub ty: String,
    pub name: &'a str,
    pub kind: NodeKind<'a>,
}

/// What the definition fragment iterates over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind<'a> {
    Struct { fields: Vec<&'a str> },
    Enum { elements: &'a [String] },
}

/// Flatten `nodes` and all their descendants in pre-order.
pub fn collect_node_infos(nodes: &[Node]) -> Vec<PrinterNodeInfo<'_>> {
    let mut infos = Vec::new();
    for node in nodes {
        collect_into(node, &TypePath::root(), &mut infos);
    }
    infos
}

fn collect_into<'a>(node: &'a Node, parent: &TypePath<'a>, infos: &mut Vec<PrinterNodeInfo<'a>>) {
    let path = parent.child(node.name());
    let kind = match node {
        Node::Struct(node) => NodeKind::Struct {
            fields: node.fields.iter().map(|f| f.name.as_str()).collect(),
        },
        Node::Enum(node) => NodeKind::Enum {
            elements: &node.elements,
        },
    };
    infos.push(PrinterNodeInfo {
        ty: path.qualified(),
        name: node.name(),
        kind,
    });
    for subnode in node.subnodes() {
        collect_into(subnode, &path, infos);
    }
}

/// Compiles printer templates against flattened node infos.
#[derive(Debug, Clone, Copy)]
pub struct PrinterCompiler<'a> {
    templates: &'a PrinterSchema,
}

impl<'a> PrinterCompiler<'a> {
    pub fn new(templates: &'a PrinterSchema) -> Self {
        Self { templates }
    }

    /// Compile the full printer: the `template` skeleton with both markers expanded.
    pub fn compile(&self, infos: &[PrinterNodeInfo<'_>]) -> Vec<String> {
        let mut declarations = Vec::new();
        let mut definitions = Vec::new();
        for info in infos {
            declarations.extend(self.declaration(info));
            definitions.extend(self.definition(info));
        }

        expand_markers(
            &self.templates.template,
            &[
                (DECLARATIONS_MARKER, declarations.as_slice()),
                (DEFINITIONS_MARKER, definitions.as_slice()),
            ],
        )
    }

    /// The `declaration` fragment for one node.
    pub fn declaration(&self, info: &PrinterNodeInfo<'_>) -> Vec<String> {
        substitute(&self.templates.declaration, &[(TYPE, &info.ty)])
    }

    /// The definition fragment for one node, chosen by its kind.
    pub fn definition(&self, info: &PrinterNodeInfo<'_>) -> Vec<String> {
        let names = [(TYPE, info.ty.as_str()), (NAME, info.name)];
        match &info.kind {
            NodeKind::Enum { elements } => {
                let cases: Vec<String> = elements
                    .iter()
                    .flat_map(|variant| {
                        substitute(
                            &self.templates.definition_enum_case,
                            &[(TYPE, &info.ty), (NAME, info.name), (VARIANT, variant)],
                        )
                    })
                    .collect();
                let body = substitute(&self.templates.definition_enum, &names);
                expand_marker(&body, ENUM_CASES_MARKER, &cases)
            }
            NodeKind::Struct { fields } if fields.is_empty() => {
                substitute(&self.templates.definition_empty, &names)
            }
            NodeKind::Struct { fields } => {
                let fields: Vec<String> = fields
                    .iter()
                    .flat_map(|field| substitute(&self.templates.field, &[(FIELD_NAME, field)]))
                    .collect();
                let body = substitute(&self.templates.definition, &names);
                expand_marker(&body, FIELDS_MARKER, &fields)
            }
        }
    }
}

/// Compile the printer for `nodes` and write it at the builder's current depth.
pub fn emit_printer(builder: &mut CodeBuilder, templates: &PrinterSchema, nodes: &[Node]) {
    let infos = collect_node_infos(nodes);
    let lines = PrinterCompiler::new(templates).compile(&infos);
    tracing::trace!(nodes = infos.len(), lines = lines.len(), "compiled printer");
    builder.push_lines(&lines);
}
