//! Fully-qualified names of nested nodes.

use std::fmt;

/// C++ scope separator.
pub const SCOPE_SEPARATOR: &str = "::";

/// The chain of enclosing node names, outermost first.
///
/// Paths are immutable: descending into a nested node creates a new path
/// with [`child`](Self::child), so there is no shared stack to keep balanced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypePath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> TypePath<'a> {
    /// The empty path, outside of any node.
    pub fn root() -> Self {
        Self::default()
    }

    /// The path of a node named `name` nested inside this one.
    pub fn child(&self, name: &'a str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name);
        Self { segments }
    }

    /// Segments joined with the scope separator, e.g. `Expr::Binary`.
    pub fn qualified(&self) -> String {
        self.segments.join(SCOPE_SEPARATOR)
    }
}

impl fmt::Display for TypePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified())
    }
}
