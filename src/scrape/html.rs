//! HTML to plain text via `scraper`.

use scraper::{ElementRef, Html, Node};

/// Upper bound on extracted text, in characters.
pub const MAX_CONTENT_CHARS: usize = 8000;

/// Subtrees dropped before text extraction: boilerplate plus never-visible elements.
const STRIPPED_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "noscript", "template",
];

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "blockquote", "body", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "form", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "li", "main", "ol", "p", "pre",
    "section", "table", "td", "th", "title", "tr", "ul",
];

/// Reduce an HTML document to newline-separated plain text.
///
/// Boilerplate subtrees (`script`, `style`, `nav`, `footer`, `header`, `aside`)
/// are skipped, block elements start new lines, every line is trimmed, blank
/// lines are dropped and the result is cut to [`MAX_CONTENT_CHARS`] characters.
#[must_use]
pub fn extract_text(html: &str) -> String {
    let doc = Html::parse_document(html);

    let mut buf = String::with_capacity(html.len().min(64 * 1024));
    collect_text(doc.root_element(), &mut buf);

    let mut text = normalize_lines(&buf);
    truncate_chars(&mut text, MAX_CONTENT_CHARS);
    text
}

fn collect_text(node: ElementRef<'_>, buf: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => buf.push_str(text),
            Node::Element(el) => {
                let tag = el.name();
                if STRIPPED_TAGS.contains(&tag) {
                    continue;
                }
                let is_block = BLOCK_TAGS.contains(&tag);
                if is_block {
                    buf.push('\n');
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(child_ref, buf);
                }
                if is_block {
                    buf.push('\n');
                }
            }
            _ => {}
        }
    }
}

fn normalize_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut `text` to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
}
