//! Printer template sections.

use serde_json::{Map, Value};

use crate::{SchemaError, value::required_string_list};

/// Text templates controlling pretty-printer generation.
///
/// Each section is an ordered list of lines. Lines may contain placeholder
/// tokens (`$type`, `$name`, `$variant`, `$field_name`) and block markers
/// (`#declarations`, `#definitions`, `#fields`, `#definition_enum_cases`)
/// which the code generator expands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterSchema {
    /// Top-level skeleton with `#declarations` and `#definitions` markers
    pub template: Vec<String>,
    /// Per-node forward statement (`$type`)
    pub declaration: Vec<String>,
    /// Body for structs with fields (`$type`, `$name`, `#fields`)
    pub definition: Vec<String>,
    /// Body for enums (`$type`, `$name`, `#definition_enum_cases`)
    pub definition_enum: Vec<String>,
    /// Per-variant fragment (`$type`, `$name`, `$variant`)
    pub definition_enum_case: Vec<String>,
    /// Body for fieldless structs (`$type`, `$name`)
    pub definition_empty: Vec<String>,
    /// Per-field fragment (`$field_name`)
    pub field: Vec<String>,
}

impl PrinterSchema {
    pub(crate) fn parse(map: &Map<String, Value>) -> Result<Self, SchemaError> {
        let section = |key| required_string_list(map, "printer", key);
        Ok(Self {
            template: section("template")?,
            declaration: section("declaration")?,
            definition: section("definition")?,
            definition_enum: section("definition_enum")?,
            definition_enum_case: section("definition_enum_case")?,
            definition_empty: section("definition_empty")?,
            field: section("field")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sections(skip: &str) -> Map<String, Value> {
        let mut map = Map::new();
        for key in [
            "template",
            "declaration",
            "definition",
            "definition_enum",
            "definition_enum_case",
            "definition_empty",
            "field",
        ] {
            if key != skip {
                map.insert(key.to_string(), json!([format!("// {}", key)]));
            }
        }
        map
    }

    #[test]
    fn test_parse_all_sections() {
        let printer = PrinterSchema::parse(&sections("")).unwrap();
        assert_eq!(printer.template, ["// template"]);
        assert_eq!(printer.definition_enum_case, ["// definition_enum_case"]);
        assert_eq!(printer.field, ["// field"]);
    }

    #[test]
    fn test_missing_field_section() {
        let err = PrinterSchema::parse(&sections("field")).unwrap_err();
        assert_eq!(err, SchemaError::missing_key("printer.field"));
    }

    #[test]
    fn test_section_must_be_list() {
        let mut map = sections("");
        map.insert("declaration".into(), json!("void print($type);"));
        let err = PrinterSchema::parse(&map).unwrap_err();
        assert_eq!(err.name(), "declaration");
    }
}
