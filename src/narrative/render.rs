//! Line-level structure of a narrative for display.

/// Marker that opens a section header line.
pub const HEADER_MARKER: &str = "### ";

/// One display line of a narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeLine<'a> {
    /// A `### ` header, marker stripped
    Header(&'a str),
    /// A body line, trimmed
    Text(&'a str),
    /// An empty line
    Blank,
}

/// Split a narrative into lines and classify each one.
#[must_use]
pub fn narrative_lines(text: &str) -> Vec<NarrativeLine<'_>> {
    text.lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                NarrativeLine::Blank
            } else if let Some(header) = trimmed.strip_prefix(HEADER_MARKER) {
                NarrativeLine::Header(header.trim())
            } else {
                NarrativeLine::Text(trimmed)
            }
        })
        .collect()
}

/// Section headers found in a narrative, in order.
#[must_use]
pub fn narrative_headers(text: &str) -> Vec<&str> {
    narrative_lines(text)
        .into_iter()
        .filter_map(|line| match line {
            NarrativeLine::Header(h) => Some(h),
            _ => None,
        })
        .collect()
}
