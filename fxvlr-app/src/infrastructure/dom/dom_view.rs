use scraper::{CaseSensitivity, ElementRef, Html, Selector};

/// Parsed page with CSS-selector lookups.
///
/// Not `Send`: build it after the body is fully read and drop it before the
/// next `.await`.
pub struct DomView {
    document: Html,
}

impl DomView {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// All elements matching `selector`, in document order. An unparseable
    /// selector matches nothing.
    pub fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match parse_selector(selector) {
            Some(sel) => self.document.select(&sel).collect(),
            None => Vec::new(),
        }
    }

    pub fn first(&self, selector: &str) -> Option<ElementRef<'_>> {
        self.nth(selector, 0)
    }

    pub fn nth(&self, selector: &str, index: usize) -> Option<ElementRef<'_>> {
        let sel = parse_selector(selector)?;
        self.document.select(&sel).nth(index)
    }

    pub fn count(&self, selector: &str) -> usize {
        match parse_selector(selector) {
            Some(sel) => self.document.select(&sel).count(),
            None => 0,
        }
    }

    /// Concatenated text of every match, untrimmed.
    pub fn text(&self, selector: &str) -> String {
        self.select(selector).iter().map(element_text).collect()
    }

    /// Trimmed text of the `index`-th match, empty when there is none.
    pub fn nth_text(&self, selector: &str, index: usize) -> String {
        self.nth(selector, index)
            .map(|el| element_text(&el).trim().to_string())
            .unwrap_or_default()
    }

    pub fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.first(selector)
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string)
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(e) => {
            tracing::debug!("Rejected selector {:?}: {}", selector, e);
            None
        }
    }
}

pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

pub fn select_within<'a>(element: &ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    match parse_selector(selector) {
        Some(sel) => element.select(&sel).collect(),
        None => Vec::new(),
    }
}

/// Value of the first `mod-<value>` class on the element.
pub fn mod_value<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    element
        .value()
        .classes()
        .find_map(|class| class.strip_prefix("mod-"))
}

pub fn has_class(element: &ElementRef<'_>, class: &str) -> bool {
    element
        .value()
        .has_class(class, CaseSensitivity::CaseSensitive)
}
