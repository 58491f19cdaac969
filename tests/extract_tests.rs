use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Html;
use axum::routing::get;
use sitesnark::scrape::{BROWSER_USER_AGENT, MAX_CONTENT_CHARS, WebContentExtractor, extract_text};
use sitesnark::{ContentExtractor, SummarizerError};

#[test]
fn test_boilerplate_elements_are_removed() {
    let html = r#"
        <html>
          <head>
            <title>Daily Widget News</title>
            <style>body { color: red; } .secret-style { }</style>
            <script>var secretScript = "tracking";</script>
          </head>
          <body>
            <header><h1>Site Header Banner</h1></header>
            <nav><ul><li>Home</li><li>Secret Nav Link</li></ul></nav>
            <main>
              <article>
                <h2>Widgets are back</h2>
                <p>The widget factory reopened today.</p>
              </article>
              <aside>Sponsored sidebar content</aside>
            </main>
            <footer>Copyright footer text</footer>
            <script>console.log("late script")</script>
          </body>
        </html>
    "#;

    let text = extract_text(html);

    for hidden in [
        "secret-style",
        "secretScript",
        "Site Header Banner",
        "Secret Nav Link",
        "Sponsored sidebar",
        "Copyright footer",
        "late script",
    ] {
        assert!(!text.contains(hidden), "{hidden:?} leaked into {text:?}");
    }

    assert_eq!(
        text,
        "Daily Widget News\nWidgets are back\nThe widget factory reopened today."
    );
}

#[test]
fn test_lines_are_trimmed_and_blank_lines_dropped() {
    let html = "<body><div>   first   </div>\n\n\n<div>\n\t second \n</div><p></p><p>  </p></body>";
    assert_eq!(extract_text(html), "first\nsecond");
}

#[test]
fn test_output_is_bounded_for_huge_documents() {
    let paragraph = "<p>Lorem ipsum dolor sit amet, consectetur adipiscing elit.</p>";
    let html = format!("<body>{}</body>", paragraph.repeat(2_000));

    let text = extract_text(&html);
    assert_eq!(text.chars().count(), MAX_CONTENT_CHARS);
}

#[test]
fn test_bound_counts_characters_not_bytes() {
    let html = format!("<p>{}</p>", "é".repeat(MAX_CONTENT_CHARS + 50));

    let text = extract_text(&html);
    assert_eq!(text.chars().count(), MAX_CONTENT_CHARS);
    assert!(text.len() > MAX_CONTENT_CHARS);
}

#[test]
fn test_empty_document_yields_empty_text() {
    assert_eq!(extract_text(""), "");
    assert_eq!(extract_text("<nav>only navigation</nav>"), "");
}

#[tokio::test]
async fn test_unreachable_host_is_upstream_error() {
    let extractor = WebContentExtractor::new().unwrap();

    // Nothing listens on port 9 of the loopback interface in the test environment.
    let err = extractor.extract("http://127.0.0.1:9/").await.unwrap_err();

    match err {
        SummarizerError::Upstream(message) => {
            assert!(message.starts_with("Error fetching website:"), "{message}");
        }
        other => panic!("Unexpected error type: {other:?}"),
    }
}

/// Local site with a missing page and a page that echoes the caller's agent.
async fn spawn_site() -> String {
    let app = Router::new()
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "gone") }))
        .route(
            "/agent",
            get(|headers: HeaderMap| async move {
                let agent = headers
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("none")
                    .to_string();
                Html(format!(
                    "<html><body><nav>Menu Link</nav><main><p>Agent: {agent}</p></main></body></html>"
                ))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_not_found_status_is_upstream_error() {
    let base = spawn_site().await;
    let extractor = WebContentExtractor::new().unwrap();

    let err = extractor.extract(&format!("{base}/missing")).await.unwrap_err();

    match err {
        SummarizerError::Upstream(message) => {
            assert!(message.starts_with("Error fetching website:"), "{message}");
            assert!(message.contains("404"), "{message}");
        }
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[tokio::test]
async fn test_live_page_is_fetched_with_browser_agent() {
    let base = spawn_site().await;
    let extractor = WebContentExtractor::new().unwrap();

    let text = extractor.extract(&format!("{base}/agent")).await.unwrap();

    assert_eq!(text, format!("Agent: {BROWSER_USER_AGENT}"));
    assert!(!text.contains("Menu Link"));
}
