//! Literal placeholder substitution and block-marker expansion.
//!
//! This is a find-and-replace engine, not a template language: tokens are
//! replaced wherever they occur as substrings, and a marker is only
//! recognized when it is the whole (trimmed) line.

/// Prefix that turns a section name into a block marker line.
pub const MARKER_SIGIL: char = '#';

/// Placeholder for the fully-qualified type path.
pub const TYPE: &str = "$type";
/// Placeholder for the node's own name.
pub const NAME: &str = "$name";
/// Placeholder for an enum element.
pub const VARIANT: &str = "$variant";
/// Placeholder for a struct field name.
pub const FIELD_NAME: &str = "$field_name";

/// Replace each `(token, value)` pair in every line, in the given order.
///
/// Unknown tokens are left untouched.
pub fn substitute(lines: &[String], substitutions: &[(&str, &str)]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            substitutions
                .iter()
                .fold(line.clone(), |line, &(token, value)| line.replace(token, value))
        })
        .collect()
}

/// Whether `line` is exactly the marker for `name`, ignoring surrounding whitespace.
pub fn is_marker(line: &str, name: &str) -> bool {
    line.trim()
        .strip_prefix(MARKER_SIGIL)
        .is_some_and(|rest| rest == name)
}

/// Replace every line that is the `name` marker with `content`.
pub fn expand_marker(lines: &[String], name: &str, content: &[String]) -> Vec<String> {
    expand_markers(lines, &[(name, content)])
}

/// Replace marker lines in a single pass over `lines`.
///
/// Each line is tested against every `(name, content)` pair; the first
/// match wins. Inserted content is never scanned for markers itself.
pub fn expand_markers(lines: &[String], markers: &[(&str, &[String])]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        match markers.iter().find(|(name, _)| is_marker(line, name)) {
            Some((_, content)) => out.extend_from_slice(content),
            None => out.push(line.clone()),
        }
    }
    out
}
