use scraper::{ElementRef, Html, Selector};

/// Containers tried in order; the first one present wins.
const CONTENT_SELECTORS: [&str; 5] = [
    ".wysiwyg--all-content",
    ".article-body",
    ".post-content",
    "article .content",
    ".entry-content",
];

const SKIPPED_TAGS: [&str; 6] = ["script", "style", "nav", "header", "footer", "aside"];

/// Minimum length (in characters) of a bare `div` used as a fallback container.
const FALLBACK_MIN_CHARS: usize = 200;

/// Pulls the readable body text out of an article page.
///
/// Returns `None` when no content container can be found.
pub fn extract_main_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let container = CONTENT_SELECTORS
        .iter()
        .filter_map(|css| Selector::parse(css).ok())
        .find_map(|selector| document.select(&selector).next())
        .or_else(|| fallback_container(&document))?;

    let text = visible_text(container);
    (!text.is_empty()).then_some(text)
}

fn fallback_container(document: &Html) -> Option<ElementRef<'_>> {
    let divs = Selector::parse("div").ok()?;
    document.select(&divs).find(|div| {
        let own_text: String = div
            .children()
            .filter_map(|child| child.value().as_text())
            .map(|text| &**text)
            .collect();
        own_text.trim().chars().count() > FALLBACK_MIN_CHARS
    })
}

/// Text nodes under `root`, trimmed and one per line, skipping page chrome.
fn visible_text(root: ElementRef<'_>) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .take_while(|ancestor| ancestor.id() != root.id())
            .chain(std::iter::once(*root))
            .filter_map(|ancestor| ancestor.value().as_element())
            .any(|element| SKIPPED_TAGS.contains(&element.name()));
        if hidden {
            continue;
        }

        let line = text.trim();
        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines.join("\n")
}
