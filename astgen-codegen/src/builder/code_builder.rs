//! Code builder utility for generating properly indented code.

use super::Indent;

/// Text sink that writes lines at a nesting depth.
///
/// Depth only changes inside [`push_indented`](Self::push_indented) and
/// [`push_block`](Self::push_block), which restore it when the closure
/// returns, so a nested emitter can never leave the builder mis-indented.
///
/// # Example
///
/// ```
/// use astgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::cpp();
/// builder.push_block("struct Point {", "};", |b| {
///     b.push_line("int x;");
///     b.push_line("int y;");
/// });
/// assert_eq!(builder.build(), "struct Point {\n    int x;\n    int y;\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn cpp() -> Self {
        Self::new(Indent::CPP)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add each line with current indentation.
    pub fn push_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Run `f` one level deeper, restoring the depth afterwards.
    pub fn push_indented<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let saved = self.indent_level;
        self.indent_level += 1;
        f(self);
        self.indent_level = saved;
        self
    }

    /// Add `header`, the indented body produced by `f`, then `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header);
        self.push_indented(f);
        self.push_line(close)
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::cpp()
    }
}
