//! AST schema model for the astgen generator.
//!
//! A schema document (JSON or TOML) describes the include lists, namespace,
//! node tree and printer templates. [`Schema::from_value`] builds the typed
//! model from a generic document value; [`parse_str_with_filename`] and
//! [`SchemaFile::open`] add document parsing and source-annotated
//! diagnostics on top.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod node;
mod printer;
mod span;
mod value;

use std::path::{Path, PathBuf};

pub use error::{Error, Result, SchemaError, SourceContext};
pub use node::{EnumNode, Field, Node, StructNode};
pub use printer::PrinterSchema;
use serde_json::Value;

/// Root of a parsed AST schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Headers included with `#include <...>`
    pub sys_includes: Vec<String>,
    /// Headers included with `#include "..."`
    pub project_includes: Vec<String>,
    /// Namespace wrapping all generated code
    pub namespace: String,
    /// Top-level nodes, always structs
    pub ast: Vec<Node>,
    pub printer: PrinterSchema,
}

impl Schema {
    /// Build a schema from a generic document value.
    ///
    /// Fails on the first missing key or malformed entry; no partial schema
    /// is ever returned.
    pub fn from_value(document: &Value) -> std::result::Result<Self, SchemaError> {
        let Value::Object(root) = document else {
            return Err(SchemaError::invalid_shape(
                "(document)",
                "a mapping",
                value::describe(document),
            ));
        };

        let sys_includes = value::required_string_list(root, "", "sys_includes")?;
        let project_includes = value::required_string_list(root, "", "project_includes")?;
        let namespace = value::required_string(root, "", "namespace")?;
        let ast = value::required_map(root, "", "ast")?;
        let printer = PrinterSchema::parse(value::required_map(root, "", "printer")?)?;

        let ast = ast
            .iter()
            .map(|(name, body)| Node::parse_top_level(name, body))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            sys_includes,
            project_includes,
            namespace,
            ast,
            printer,
        })
    }
}

/// Document syntax of a schema source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaFormat {
    #[default]
    Json,
    Toml,
}

impl SchemaFormat {
    /// Pick the format from a file extension (`.toml`, anything else is JSON).
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    /// Parse raw source text into a generic document value.
    fn load(self, ctx: &SourceContext) -> Result<Value> {
        match self {
            Self::Json => serde_json::from_str(ctx.src()).map_err(|e| ctx.json_error(e)),
            Self::Toml => toml::from_str::<toml::Table>(ctx.src())
                .map(|table| value::from_toml(toml::Value::Table(table)))
                .map_err(|e| ctx.toml_error(e)),
        }
    }
}

/// Parse a JSON schema from a string (uses "ast.json" as default filename)
pub fn parse_str(content: &str) -> Result<Schema> {
    parse_str_with_filename(content, "ast.json", SchemaFormat::Json)
}

/// Parse a schema from a string with a custom filename for error reporting
pub fn parse_str_with_filename(
    content: &str,
    filename: &str,
    format: SchemaFormat,
) -> Result<Schema> {
    let ctx = SourceContext::new(content, filename);
    let document = format.load(&ctx)?;
    let schema = Schema::from_value(&document).map_err(|e| ctx.schema_error(e))?;
    tracing::debug!(
        filename,
        ?format,
        nodes = schema.ast.len(),
        namespace = %schema.namespace,
        "parsed schema"
    );
    Ok(schema)
}

/// Parse a schema file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Schema> {
    SchemaFile::open(path).map(|file| file.schema)
}

/// A schema file with both raw content and parsed schema.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    schema: Schema,
}

impl SchemaFile {
    /// Open and parse a schema file, choosing the format by extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let schema = parse_str_with_filename(&content, &filename, SchemaFormat::from_path(&path))?;

        Ok(Self {
            path,
            content,
            schema,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn printer() -> Value {
        json!({
            "template": ["#declarations", "#definitions"],
            "declaration": ["void print(const $type& node);"],
            "definition": ["void print(const $type& node) {", "#fields", "}"],
            "definition_enum": ["void print($type v) {", "#definition_enum_cases", "}"],
            "definition_enum_case": ["case $type::$variant: break;"],
            "definition_empty": ["void print(const $type&) {}"],
            "field": ["print(node.$field_name);"],
        })
    }

    fn document() -> Value {
        json!({
            "sys_includes": ["variant", "string_view"],
            "project_includes": ["mem.h"],
            "namespace": "alvo::ast",
            "ast": {
                "Expr": {
                    "Kind": ["Lit", "Binary"],
                    "Binary": { "lhs": "Ptr<Expr>", "rhs": "Ptr<Expr>" },
                    "kind": "Kind",
                },
                "Module": { "items": "List<Expr>" },
            },
            "printer": printer(),
        })
    }

    #[test]
    fn test_from_value() {
        let schema = Schema::from_value(&document()).unwrap();

        assert_eq!(schema.sys_includes, ["variant", "string_view"]);
        assert_eq!(schema.project_includes, ["mem.h"]);
        assert_eq!(schema.namespace, "alvo::ast");
        let names: Vec<_> = schema.ast.iter().map(Node::name).collect();
        assert_eq!(names, ["Expr", "Module"]);
        assert_eq!(schema.printer.field, ["print(node.$field_name);"]);
    }

    #[test]
    fn test_missing_top_level_keys() {
        for key in ["sys_includes", "project_includes", "namespace", "ast", "printer"] {
            let mut doc = document();
            doc.as_object_mut().unwrap().remove(key);
            let err = Schema::from_value(&doc).unwrap_err();
            assert_eq!(err, SchemaError::missing_key(key), "removing {key}");
        }
    }

    #[test]
    fn test_missing_printer_field() {
        let mut doc = document();
        doc["printer"].as_object_mut().unwrap().remove("field");
        let err = Schema::from_value(&doc).unwrap_err();
        assert_eq!(err, SchemaError::missing_key("printer.field"));
    }

    #[test]
    fn test_numeric_body_fails() {
        let mut doc = document();
        doc["ast"]["Expr"]["Binary"]["op"] = json!(42);
        let err = Schema::from_value(&doc).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidShape {
                path: "Expr.Binary.op".into(),
                expected: "a mapping (struct), list (enum) or string (field type)",
                found: "number",
            }
        );
    }

    #[test]
    fn test_root_must_be_mapping() {
        let err = Schema::from_value(&json!([])).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidShape { found: "list", .. }));
    }

    #[test]
    fn test_parse_str_reports_json_syntax() {
        let err = parse_str("{ \"ast\": ").unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_parse_str_wraps_schema_error() {
        let err = parse_str(r#"{"sys_includes": []}"#).unwrap_err();
        assert_eq!(
            err.schema_error(),
            Some(SchemaError::missing_key("project_includes"))
        );
    }

    #[test]
    fn test_parse_toml_schema() {
        let src = r##"
sys_includes = ["vector"]
project_includes = []
namespace = "demo"

[ast.Stmt]
expr = "Expr"

[ast.Stmt.Kind]

[printer]
template = ["#declarations"]
declaration = []
definition = []
definition_enum = []
definition_enum_case = []
definition_empty = []
field = []
"##;
        let schema = parse_str_with_filename(src, "ast.toml", SchemaFormat::Toml).unwrap();
        let Node::Struct(stmt) = &schema.ast[0] else {
            panic!("expected struct");
        };
        assert_eq!(stmt.fields[0].name, "expr");
        assert_eq!(stmt.subnodes[0].name(), "Kind");
        assert_eq!(schema.printer.template, ["#declarations"]);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(SchemaFormat::from_path("ast.toml"), SchemaFormat::Toml);
        assert_eq!(SchemaFormat::from_path("ast.TOML"), SchemaFormat::Toml);
        assert_eq!(SchemaFormat::from_path("ast.json"), SchemaFormat::Json);
        assert_eq!(SchemaFormat::from_path("schema"), SchemaFormat::Json);
    }

    #[test]
    fn test_schema_file_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ast.json");
        std::fs::write(&path, document().to_string()).unwrap();

        let file = SchemaFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.schema().ast.len(), 2);
        assert!(file.content().contains("alvo::ast"));
    }

    #[test]
    fn test_schema_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = SchemaFile::open(temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
