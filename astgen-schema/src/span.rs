//! Locating schema entries in the raw document text for diagnostics.

use miette::SourceSpan;

/// Convert a 1-based line/column pair into a byte offset.
///
/// Returns `None` when the position lies outside the source or when the
/// reporter gave no position (line 0).
pub(crate) fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start = if line == 1 {
        0
    } else {
        src.match_indices('\n').nth(line - 2).map(|(pos, _)| pos + 1)?
    };
    let offset = line_start + column.saturating_sub(1);
    (offset <= src.len()).then_some(offset)
}

/// Find the span of a key in a JSON or TOML schema source.
///
/// Searches for patterns like `"name":`, `name =`, `[ast.name]` or
/// `.name.`. The first match wins, so a key reused under a different parent
/// may point at the earlier occurrence.
pub(crate) fn find_key_span(src: &str, name: &str) -> Option<SourceSpan> {
    // JSON object keys: "name" followed by optional whitespace and ':'
    let quoted = format!("\"{}\"", name);
    let mut from = 0;
    while let Some(rel) = src[from..].find(&quoted) {
        let pos = from + rel;
        let after = &src[pos + quoted.len()..];
        if after.trim_start().starts_with(':') {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
        from = pos + quoted.len();
    }

    // TOML table headers with a leading dot: [ast.name] or [ast.name.sub]
    for pattern in [format!(".{}]", name), format!(".{}.", name)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // TOML key/value pairs at the start of a line or inside an inline table
    for (pattern, skip) in [
        (format!("\n{} =", name), 1usize),
        (format!("\n{}=", name), 1usize),
        (format!("{{ {} =", name), 2usize),
        (format!(", {} =", name), 2usize),
    ] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }
    if src.starts_with(&format!("{} =", name)) || src.starts_with(&format!("{}=", name)) {
        return Some(SourceSpan::from((0, name.len())));
    }

    // No fallback - better to have no span than point to wrong location
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanned<'a>(src: &'a str, span: SourceSpan) -> &'a str {
        &src[span.offset()..span.offset() + span.len()]
    }

    #[test]
    fn test_offset_of_first_line() {
        assert_eq!(offset_of("abc", 1, 2), Some(1));
    }

    #[test]
    fn test_offset_of_later_line() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        let offset = offset_of(src, 3, 3).unwrap();
        assert_eq!(&src[offset..offset + 4], "oops");
    }

    #[test]
    fn test_offset_of_out_of_range() {
        assert_eq!(offset_of("abc", 0, 1), None);
        assert_eq!(offset_of("abc", 4, 1), None);
    }

    #[test]
    fn test_find_json_key_skips_string_values() {
        // "Expr" first appears as a value, then as a key
        let src = r#"{"kind": "Expr", "Expr": {"lit": 3}}"#;
        let span = find_key_span(src, "Expr").unwrap();
        assert_eq!(span.offset(), 18);
        assert_eq!(spanned(src, span), "Expr");
    }

    #[test]
    fn test_find_json_key_with_whitespace() {
        let src = "{\n  \"lit\"   : 3\n}";
        let span = find_key_span(src, "lit").unwrap();
        assert_eq!(spanned(src, span), "lit");
        assert_eq!(span.offset(), 5);
    }

    #[test]
    fn test_find_toml_table_header() {
        let src = "[ast.Expr.Binary]\nlhs = \"Ptr<Expr>\"";
        let span = find_key_span(src, "Binary").unwrap();
        assert_eq!(span.offset(), 10);
        assert_eq!(spanned(src, span), "Binary");
    }

    #[test]
    fn test_find_toml_key_value() {
        let src = "[ast.Expr]\nlit = 3\n";
        let span = find_key_span(src, "lit").unwrap();
        assert_eq!(spanned(src, span), "lit");
        assert_eq!(span.offset(), 11);
    }

    #[test]
    fn test_find_toml_key_at_start() {
        let src = "namespace = [\"a\"]\n";
        let span = find_key_span(src, "namespace").unwrap();
        assert_eq!(span.offset(), 0);
    }

    #[test]
    fn test_find_missing_key() {
        assert!(find_key_span("{\"a\": 1}", "b").is_none());
    }
}
