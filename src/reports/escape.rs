//! Escaping for respondent-supplied text in Markdown reports.
//!
//! Company names, contact names and titles come straight from the
//! respondent and may contain Markdown syntax that would break tables or
//! inject formatting.

/// Escape a string for use inside a Markdown table cell.
///
/// # Examples
///
/// ```
/// use packaging_audit::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("Foo | Bar"), "Foo \\| Bar");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '`' | '[' | ']' => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for inline Markdown (headings, bold runs, list items).
///
/// # Examples
///
/// ```
/// use packaging_audit::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**Acme**"), "\\*\\*Acme\\*\\*");
/// ```
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' | '_' | '`' | '[' | ']' | '#' | '!' | '~' | '|' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}
