//! Structural `operator==` / `operator!=` generation.
//!
//! Every struct node in the tree gets a comparison pair; enums compare with
//! the built-in operators and are skipped. Both operators are derived from
//! the field list independently: `!=` is never written as `!(l == r)`.

use astgen_schema::{Node, StructNode};

use crate::{builder::CodeBuilder, type_path::TypePath};

/// Which comparison operator to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
}

impl Comparison {
    /// Both operators, in emission order.
    pub const ALL: [Comparison; 2] = [Comparison::Equal, Comparison::NotEqual];

    /// The C++ operator token.
    pub fn operator(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }

    /// Connective between per-field comparisons.
    fn joiner(self) -> &'static str {
        match self {
            Self::Equal => " && ",
            Self::NotEqual => " || ",
        }
    }

    /// Result for a struct without fields: all instances are equal.
    fn vacuous(self) -> &'static str {
        match self {
            Self::Equal => "true",
            Self::NotEqual => "false",
        }
    }
}

/// Emit `bool operatorOP(...);` for every struct in `nodes`, pre-order.
pub fn emit_forward_declarations(builder: &mut CodeBuilder, nodes: &[Node], op: Comparison) {
    for node in nodes {
        walk_structs(node, &TypePath::root(), &mut |path, node| {
            builder.push_line(&format!("{};", signature(path, node, op)));
        });
    }
}

/// Emit the definition of `operatorOP` for every struct in `nodes`, pre-order.
pub fn emit_definitions(builder: &mut CodeBuilder, nodes: &[Node], op: Comparison) {
    for node in nodes {
        walk_structs(node, &TypePath::root(), &mut |path, node| {
            builder.push_block(&format!("{} {{", signature(path, node, op)), "}", |b| {
                b.push_line(&format!("return {};", body(node, op)));
            });
        });
    }
}

/// Visit every struct reachable from `node` in pre-order with its full path.
fn walk_structs<'a, F>(node: &'a Node, parent: &TypePath<'a>, visit: &mut F)
where
    F: FnMut(&TypePath<'a>, &'a StructNode),
{
    if let Node::Struct(node) = node {
        let path = parent.child(&node.name);
        visit(&path, node);
        for subnode in &node.subnodes {
            walk_structs(subnode, &path, visit);
        }
    }
}

fn signature(path: &TypePath<'_>, node: &StructNode, op: Comparison) -> String {
    // Fieldless comparisons never read their operands.
    let attr = if node.fields.is_empty() {
        "[[maybe_unused]] "
    } else {
        ""
    };
    let ty = path.qualified();
    format!(
        "bool operator{}({attr}const {ty}& l, {attr}const {ty}& r)",
        op.operator()
    )
}

fn body(node: &StructNode, op: Comparison) -> String {
    if node.fields.is_empty() {
        return op.vacuous().to_string();
    }
    node.fields
        .iter()
        .map(|field| format!("l.{name} {} r.{name}", op.operator(), name = field.name))
        .collect::<Vec<_>>()
        .join(op.joiner())
}
