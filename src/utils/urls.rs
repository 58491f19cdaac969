use url::Url;

use crate::errors::SummarizerError;

/// Prefix `https://` onto bare hosts; leave explicit `http://`/`https://` URLs alone.
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Normalize and check that the result is a plausible HTTP(S) URL with a host.
///
/// # Errors
///
/// Returns `Validation` for blank input or anything `url` cannot parse.
pub fn prepare_url(raw: &str) -> Result<String, SummarizerError> {
    if raw.trim().is_empty() {
        return Err(SummarizerError::Validation("URL is required".to_string()));
    }

    let normalized = normalize_url(raw);
    let parsed = Url::parse(&normalized)
        .map_err(|e| SummarizerError::Validation(format!("Invalid URL: {e}")))?;

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(SummarizerError::Validation(
            "Invalid URL: missing host".to_string(),
        ));
    }

    Ok(normalized)
}
