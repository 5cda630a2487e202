//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    pub namespace: String,
    pub stats: SchemaStats,
}

/// Node counts over the whole tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStats {
    pub top_level: usize,
    pub structs: usize,
    pub enums: usize,
    pub fields: usize,
    /// Enum elements.
    pub elements: usize,
    /// Deepest nesting, top-level nodes count as 1.
    pub max_depth: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        out.newline();

        out.key_value("Namespace", &self.namespace);
        out.section("Nodes");
        let stats = &self.stats;
        out.key_value_indented("top-level", &stats.top_level.to_string());
        out.key_value_indented("structs", &stats.structs.to_string());
        out.key_value_indented("enums", &stats.enums.to_string());
        out.key_value_indented("fields", &stats.fields.to_string());
        out.key_value_indented("enum elements", &stats.elements.to_string());
        out.key_value_indented("max depth", &stats.max_depth.to_string());
    }
}
