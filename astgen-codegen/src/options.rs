use crate::builder::Indent;

/// Default name of the declarations unit.
pub const DEFAULT_HEADER_NAME: &str = "ast.h";
/// Default name of the definitions unit.
pub const DEFAULT_SOURCE_NAME: &str = "ast.cpp";

/// Codegen settings that are not part of the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub indent: Indent,
    /// File name of the declarations unit; the definitions unit includes it by this name
    pub header_name: String,
    /// File name of the definitions unit
    pub source_name: String,
}

impl GeneratorOptions {
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = name.into();
        self
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: Indent::CPP,
            header_name: DEFAULT_HEADER_NAME.to_string(),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
        }
    }
}
