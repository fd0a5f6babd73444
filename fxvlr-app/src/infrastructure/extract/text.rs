/// Leading-integer parse: skips leading whitespace, reads ASCII digits and
/// ignores whatever follows. `"13 "` and `"13abc"` give 13, `"–"` gives `None`.
pub fn parse_leading_int(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Drops newlines and tabs, then trims.
pub fn collapse_line_breaks(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\n' && *c != '\t' && *c != '\r')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Protocol-relative URLs get `https:`; absent URLs become empty.
pub fn normalize_img_url(url: Option<&str>) -> String {
    match url {
        Some(url) if url.starts_with("//") => format!("https:{url}"),
        Some(url) => url.to_string(),
        None => String::new(),
    }
}
