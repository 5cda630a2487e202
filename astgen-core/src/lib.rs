//! Core utilities for the astgen AST generator.
//!
//! This crate provides the output side shared by the generator and the
//! command line driver: writing generated units to disk and running an
//! external formatter over them.

mod file;
mod formatter;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult, write_files};
// Formatting
pub use formatter::{ClangFormat, FormatError, SourceFormatter};
