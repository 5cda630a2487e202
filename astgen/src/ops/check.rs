//! Check operation - schema validation and statistics.

use astgen_schema::{Node, SchemaFile};

use crate::reports::{CheckReport, SchemaStats};

/// Execute the check operation.
///
/// Loading the file already validated it; this only summarizes the tree.
pub fn check(schema_file: &SchemaFile) -> CheckReport {
    let schema = schema_file.schema();
    let mut stats = SchemaStats {
        top_level: schema.ast.len(),
        ..SchemaStats::default()
    };
    for node in &schema.ast {
        collect(node, 1, &mut stats);
    }

    CheckReport {
        schema_path: schema_file.path().to_path_buf(),
        namespace: schema.namespace.clone(),
        stats,
    }
}

fn collect(node: &Node, depth: usize, stats: &mut SchemaStats) {
    stats.max_depth = stats.max_depth.max(depth);
    match node {
        Node::Struct(node) => {
            stats.structs += 1;
            stats.fields += node.fields.len();
            for subnode in &node.subnodes {
                collect(subnode, depth + 1, stats);
            }
        }
        Node::Enum(node) => {
            stats.enums += 1;
            stats.elements += node.elements.len();
        }
    }
}
