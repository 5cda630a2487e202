//! Forward declarations and full type declarations.

use astgen_schema::{EnumNode, Node, StructNode};

use crate::builder::CodeBuilder;

/// Emit `struct Name;` or `enum class Name;`.
pub fn emit_forward_declaration(builder: &mut CodeBuilder, node: &Node) {
    match node {
        Node::Struct(node) => builder.push_line(&format!("struct {};", node.name)),
        Node::Enum(node) => builder.push_line(&format!("enum class {};", node.name)),
    };
}

/// Emit the full declaration of `node`, nested nodes first, then fields.
pub fn emit_declaration(builder: &mut CodeBuilder, node: &Node) {
    match node {
        Node::Struct(node) => emit_struct(builder, node),
        Node::Enum(node) => emit_enum(builder, node),
    }
}

fn emit_struct(builder: &mut CodeBuilder, node: &StructNode) {
    builder.push_block(&format!("struct {} {{", node.name), "};", |b| {
        for subnode in &node.subnodes {
            emit_declaration(b, subnode);
        }
        for field in &node.fields {
            b.push_line(&format!("{} {};", field.ty, field.name));
        }
    });
}

fn emit_enum(builder: &mut CodeBuilder, node: &EnumNode) {
    builder.push_block(&format!("enum class {} {{", node.name), "};", |b| {
        for element in &node.elements {
            b.push_line(&format!("{},", element));
        }
    });
}

#[cfg(test)]
mod tests {
    use astgen_schema::Field;

    use super::*;

    fn field(name: &str, ty: &str) -> Field {
        Field {
            name: name.into(),
            ty: ty.into(),
        }
    }

    #[test]
    fn test_forward_declarations() {
        let mut builder = CodeBuilder::cpp();
        emit_forward_declaration(
            &mut builder,
            &Node::Struct(StructNode {
                name: "Expr".into(),
                subnodes: vec![],
                fields: vec![],
            }),
        );
        emit_forward_declaration(
            &mut builder,
            &Node::Enum(EnumNode {
                name: "Op".into(),
                elements: vec!["Add".into()],
            }),
        );
        assert_eq!(builder.build(), "struct Expr;\nenum class Op;\n");
    }

    #[test]
    fn test_struct_declaration_orders_subnodes_before_fields() {
        let node = Node::Struct(StructNode {
            name: "Binary".into(),
            subnodes: vec![Node::Enum(EnumNode {
                name: "Op".into(),
                elements: vec!["Add".into(), "Sub".into()],
            })],
            fields: vec![field("op", "Op"), field("lhs", "Ptr<Expr>")],
        });

        let mut builder = CodeBuilder::cpp();
        emit_declaration(&mut builder, &node);

        assert_eq!(
            builder.build(),
            "struct Binary {\n\
             \x20   enum class Op {\n\
             \x20       Add,\n\
             \x20       Sub,\n\
             \x20   };\n\
             \x20   Op op;\n\
             \x20   Ptr<Expr> lhs;\n\
             };\n"
        );
    }

    #[test]
    fn test_declaration_keeps_outer_indent() {
        let node = Node::Struct(StructNode {
            name: "Empty".into(),
            subnodes: vec![],
            fields: vec![],
        });

        let mut builder = CodeBuilder::cpp();
        builder.push_indented(|b| emit_declaration(b, &node));
        builder.push_line("next;");

        assert_eq!(builder.build(), "    struct Empty {\n    };\nnext;\n");
    }
}
