//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indentation-aware text sink with scoped nesting
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
