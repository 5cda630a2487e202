//! AST node definitions.

use serde_json::{Map, Value};

use crate::{SchemaError, value};

/// A named, typed member of a struct node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Target-language type expression, kept as opaque text
    pub ty: String,
}

/// A schema-defined struct or enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Struct(StructNode),
    Enum(EnumNode),
}

/// A record type with nested node definitions and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructNode {
    pub name: String,
    pub subnodes: Vec<Node>,
    pub fields: Vec<Field>,
}

/// An enumeration with named variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumNode {
    pub name: String,
    pub elements: Vec<String>,
}

impl Node {
    /// The node's own identifier.
    pub fn name(&self) -> &str {
        match self {
            Node::Struct(node) => &node.name,
            Node::Enum(node) => &node.name,
        }
    }

    /// Nested nodes (always empty for enums).
    pub fn subnodes(&self) -> &[Node] {
        match self {
            Node::Struct(node) => &node.subnodes,
            Node::Enum(_) => &[],
        }
    }

    /// Parse a top-level `ast` entry, which must be a struct body.
    pub(crate) fn parse_top_level(name: &str, body: &Value) -> Result<Self, SchemaError> {
        match body {
            Value::Object(map) => Ok(Node::Struct(StructNode::parse(name, name, map)?)),
            other => Err(SchemaError::invalid_shape(
                name,
                "a mapping (top-level nodes are structs)",
                value::describe(other),
            )),
        }
    }
}

impl StructNode {
    /// Parse a struct body, discriminating each entry by the shape of its value.
    fn parse(name: &str, path: &str, body: &Map<String, Value>) -> Result<Self, SchemaError> {
        let mut subnodes = Vec::new();
        let mut fields = Vec::new();

        for (entry, value) in body {
            let entry_path = format!("{}.{}", path, entry);
            match value {
                Value::Object(map) => {
                    subnodes.push(Node::Struct(StructNode::parse(entry, &entry_path, map)?));
                }
                Value::Array(items) => {
                    subnodes.push(Node::Enum(EnumNode::parse(entry, &entry_path, items)?));
                }
                Value::String(ty) => fields.push(Field {
                    name: entry.clone(),
                    ty: ty.clone(),
                }),
                other => {
                    return Err(SchemaError::invalid_shape(
                        entry_path,
                        "a mapping (struct), list (enum) or string (field type)",
                        value::describe(other),
                    ));
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            subnodes,
            fields,
        })
    }
}

impl EnumNode {
    fn parse(name: &str, path: &str, items: &[Value]) -> Result<Self, SchemaError> {
        let elements = items
            .iter()
            .map(|item| match item {
                Value::String(element) => Ok(element.clone()),
                other => Err(SchemaError::invalid_shape(
                    path,
                    "a list of strings (enum elements)",
                    value::describe(other),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            elements,
        })
    }
}
