use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Find every case-insensitive occurrence of `query` in `text`
///
/// Returns byte ranges into `text`. ASCII-insensitive comparison keeps byte
/// positions identical between the original and lowered strings.
pub fn find_matches(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_ascii_lowercase();
    let query_lower = query.to_ascii_lowercase();

    let mut matches = Vec::new();
    let mut search_start = 0;
    while let Some(pos) = text_lower[search_start..].find(&query_lower) {
        let start = search_start + pos;
        matches.push((start, start + query_lower.len()));
        search_start = start + query_lower.len();
    }
    matches
}

/// Build a styled line with every query occurrence emphasized
pub fn highlight_line<'a>(
    text: &'a str,
    query: &str,
    base_style: Style,
    match_style: Style,
) -> Line<'a> {
    let matches = find_matches(text, query);
    if matches.is_empty() {
        return Line::from(Span::styled(text, base_style));
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    for (start, end) in matches {
        if cursor < start {
            spans.push(Span::styled(&text[cursor..start], base_style));
        }
        spans.push(Span::styled(&text[start..end], match_style));
        cursor = end;
    }
    if cursor < text.len() {
        spans.push(Span::styled(&text[cursor..], base_style));
    }
    Line::from(spans)
}
