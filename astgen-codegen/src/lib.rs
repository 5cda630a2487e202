//! C++ source generation for astgen schemas.
//!
//! Given a parsed [`Schema`](astgen_schema::Schema), the [`Generator`]
//! renders two units: a declarations unit with the node types, comparison
//! prototypes and pretty-printer code, and a definitions unit with the
//! comparison bodies.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text sink (CodeBuilder, Indent)
//! - [`decls`] - Forward declarations and type declarations
//! - [`equality`] - `operator==` / `operator!=` generation
//! - [`printer`] - Printer template compiler
//! - [`files`] - The two output units

pub mod builder;
pub mod decls;
pub mod equality;
pub mod files;
mod generator;
mod options;
pub mod printer;
mod type_path;

pub use generator::{GenerateResult, Generator, PreviewFile, WrittenFile};
pub use options::{DEFAULT_HEADER_NAME, DEFAULT_SOURCE_NAME, GeneratorOptions};
pub use type_path::{SCOPE_SEPARATOR, TypePath};
