//! Title and main-text extraction from arbitrary HTML.
//!
//! There are no site-specific rules: noise elements are dropped and the body
//! is taken from the first selector in [`BODY_FALLBACKS`] that yields text.
//! Malformed HTML never fails, it only degrades to less precise text.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

/// Title used when a page offers none.
pub const UNTITLED_PAGE: &str = "Untitled Page";

/// Elements that never count as content.
const NOISE: &str = "script, style, nav, footer, header, aside, .advertisement, .ads, .sidebar";

/// Containers tried in order; their matches are concatenated.
const BODY_FALLBACKS: &[&str] = &["article", "main", "section"];

static NOISE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector(NOISE));
static OG_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector(r#"meta[property="og:title"]"#));
static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector("title"));
static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector("h1"));
static P_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector("p"));

fn parse_selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

/// Title and readable body of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub title: String,
    /// Whitespace-normalized body text. Empty if the page has no text.
    pub content: String,
}

/// Extract the title and main text from raw HTML.
pub fn extract(html: &str) -> ExtractedPage {
    let mut document = Html::parse_document(html);

    // Title first: the noise pass removes <header>, which often holds the <h1>.
    let title = extract_title(&document);
    strip_noise(&mut document);
    let content = normalize_whitespace(&extract_body(&document));

    ExtractedPage { title, content }
}

/// Resolve the page title: og:title, then <title>, then the first <h1>.
pub fn extract_title(document: &Html) -> String {
    let og_title = document
        .select(&OG_TITLE_SELECTOR)
        .filter_map(|meta| meta.value().attr("content"))
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(str::to_string);

    og_title
        .or_else(|| first_text(document, &TITLE_SELECTOR))
        .or_else(|| first_text(document, &H1_SELECTOR))
        .unwrap_or_else(|| UNTITLED_PAGE.to_string())
}

/// Trimmed text of the first element matching `selector`, if non-empty.
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el| normalize_whitespace(&element_text(el)))
        .filter(|t| !t.is_empty())
}

/// Detach every noise element from the tree.
fn strip_noise(document: &mut Html) {
    let ids: Vec<_> = document
        .root_element()
        .select(&NOISE_SELECTOR)
        .map(|el| el.id())
        .collect();

    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Walk the body fallback chain, returning the first non-blank candidate.
fn extract_body(document: &Html) -> String {
    // Select from the root element so detached noise subtrees are not revisited.
    let root = document.root_element();

    for css in BODY_FALLBACKS {
        let selector = parse_selector(css);
        let text: String = root.select(&selector).map(element_text).collect();
        if !text.trim().is_empty() {
            return text;
        }
    }

    let paragraphs = root
        .select(&P_SELECTOR)
        .map(element_text)
        .collect::<Vec<_>>()
        .join(" ");
    if !paragraphs.trim().is_empty() {
        return paragraphs;
    }

    element_text(root)
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
