//! Content extraction: fetch a webpage and reduce it to plain text

pub mod fetcher;
pub mod html;

pub use fetcher::{BROWSER_USER_AGENT, FETCH_TIMEOUT, WebContentExtractor};
pub use html::{MAX_CONTENT_CHARS, extract_text};
