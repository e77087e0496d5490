//! Escaping utilities for report generation.
//!
//! Version labels and dates come from hand-edited catalogs, so every value
//! embedded in HTML, Markdown or CSV output passes through one of these
//! functions first.

/// Rewrite `s` one character at a time. `None` keeps the character.
fn map_chars(s: &str, replace: impl Fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match replace(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

const fn html_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#x27;"),
        _ => None,
    }
}

/// HTML-escape text content.
///
/// ```
/// use release_support::reports::escape::escape_html;
///
/// assert_eq!(escape_html("<b>v4.6</b> & 'next'"),
///     "&lt;b&gt;v4.6&lt;/b&gt; &amp; &#x27;next&#x27;");
/// assert_eq!(escape_html("v4.6"), "v4.6");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    map_chars(s, html_entity)
}

/// HTML-escape an attribute value; line breaks and tabs are encoded too.
///
/// ```
/// use release_support::reports::escape::escape_html_attr;
///
/// assert_eq!(escape_html_attr("v4.6 \"rc\"\n"), "v4.6 &quot;rc&quot;&#10;");
/// ```
#[must_use]
pub fn escape_html_attr(s: &str) -> String {
    map_chars(s, |c| match c {
        '\n' => Some("&#10;"),
        '\r' => Some("&#13;"),
        '\t' => Some("&#9;"),
        other => html_entity(other),
    })
}

/// Escape a Markdown table cell so it cannot split or link.
///
/// ```
/// use release_support::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("v1 | beta"), "v1 \\| beta");
/// assert_eq!(escape_markdown_table("two\nlines"), "two lines");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    map_chars(s, |c| match c {
        '|' => Some("\\|"),
        '`' => Some("\\`"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '\n' => Some(" "),
        '\r' => Some(""),
        _ => None,
    })
}

/// Escape Markdown inline content such as headings.
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().filter(|c| *c != '\r') {
        if "*_`[]#!~|<>".contains(c) {
            out.push('\\');
        }
        out.push(if c == '\n' { ' ' } else { c });
    }
    out
}

/// Escape a CSV field. Newlines are flattened to spaces; fields holding a
/// comma or quote are quoted with inner quotes doubled.
#[must_use]
pub fn escape_csv(s: &str) -> String {
    let flattened = s.replace(['\n', '\r'], " ");
    if flattened.contains([',', '"']) {
        format!("\"{}\"", flattened.replace('"', "\"\""))
    } else {
        flattened
    }
}
