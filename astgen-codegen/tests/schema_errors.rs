//! Malformed schemas fail before any unit is produced.

use astgen_codegen::Generator;
use astgen_core::FileRules;
use astgen_schema::{SchemaError, parse_file, parse_str};
use serde_json::{Value, json};
use tempfile::TempDir;

const AST_JSON: &str = include_str!("fixtures/ast.json");

fn document() -> Value {
    serde_json::from_str(AST_JSON).unwrap()
}

#[test]
fn test_numeric_node_body_is_invalid_shape() {
    let mut doc = document();
    doc["ast"]["Expr"]["Binary"]["lhs"] = json!(42);

    let err = parse_str(&doc.to_string()).unwrap_err();
    assert_eq!(
        err.schema_error(),
        Some(SchemaError::InvalidShape {
            path: "Expr.Binary.lhs".into(),
            expected: "a mapping (struct), list (enum) or string (field type)",
            found: "number",
        })
    );
}

#[test]
fn test_top_level_enum_is_invalid_shape() {
    let mut doc = document();
    doc["ast"]["Kind"] = json!(["A", "B"]);

    let err = parse_str(&doc.to_string()).unwrap_err();
    assert!(matches!(
        err.schema_error(),
        Some(SchemaError::InvalidShape { path, found: "list", .. }) if path == "Kind"
    ));
}

#[test]
fn test_non_string_enum_element_is_invalid_shape() {
    let mut doc = document();
    doc["ast"]["Expr"]["Op"] = json!(["Add", 1]);

    let err = parse_str(&doc.to_string()).unwrap_err();
    assert!(matches!(
        err.schema_error(),
        Some(SchemaError::InvalidShape { path, .. }) if path == "Expr.Op"
    ));
}

#[test]
fn test_missing_printer_field_is_missing_key() {
    let mut doc = document();
    doc["printer"].as_object_mut().unwrap().remove("field");

    let err = parse_str(&doc.to_string()).unwrap_err();
    assert_eq!(
        err.schema_error(),
        Some(SchemaError::MissingKey {
            key: "printer.field".into()
        })
    );
}

#[test]
fn test_error_produces_no_output() {
    let temp = TempDir::new().unwrap();
    let schema_path = temp.path().join("ast.json");
    let out = temp.path().join("out");

    let mut doc = document();
    doc["ast"]["Module"]["items"] = json!(null);
    std::fs::write(&schema_path, doc.to_string()).unwrap();

    let result = parse_file(&schema_path)
        .map(|schema| Generator::new(&schema).generate(&out, FileRules::default()).is_ok());

    assert!(result.is_err());
    assert!(!out.exists());
}
