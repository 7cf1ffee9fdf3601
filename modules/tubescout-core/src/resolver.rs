//! Best-effort canonicalization of user-supplied YouTube references.
//!
//! Turns whatever the user pasted (bare ID, watch URL, shortened URL,
//! handle URL) into the bare identifier the scraper service expects. The
//! contract is deliberately infallible: anything that fails to parse passes
//! through unchanged, and the service performs final validation.

use tracing::debug;
use url::Url;

use crate::types::RefKind;

/// Resolve a raw reference to its canonical identifier.
///
/// Idempotent: resolving an already-canonical ID returns it unchanged.
pub fn resolve(kind: RefKind, raw: &str) -> String {
    let input = raw.trim();
    match kind {
        RefKind::Video => resolve_video(input),
        RefKind::Channel => resolve_channel(input),
    }
}

fn resolve_video(input: &str) -> String {
    // Anything that doesn't look like a YouTube URL is assumed to be an ID.
    if !input.contains("youtube.com") && !input.contains("youtu.be") {
        return input.to_string();
    }

    // Standard watch URLs: youtube.com/watch?v=VIDEO_ID
    if input.contains("youtube.com/watch") {
        match Url::parse(input) {
            Ok(url) => {
                if let Some((_, id)) = url.query_pairs().find(|(k, _)| k == "v") {
                    if !id.is_empty() {
                        return id.into_owned();
                    }
                }
            }
            Err(err) => {
                debug!(input, error = %err, "Watch URL failed to parse, passing reference through");
            }
        }
    }

    // Shortened URLs: youtu.be/VIDEO_ID, possibly with query parameters.
    if input.contains("youtu.be") {
        if let Some(segment) = input.split('/').next_back() {
            let end = segment.find('?').unwrap_or(segment.len());
            return segment[..end].to_string();
        }
    }

    input.to_string()
}

fn resolve_channel(input: &str) -> String {
    if !input.contains("youtube.com") {
        return input.to_string();
    }

    // /channel/ yields a real channel ID. /c/ and /@ yield a handle or
    // custom name, which the service resolves itself; we pass it through.
    for marker in ["/channel/", "/c/", "/@"] {
        if let Some((_, tail)) = input.split_once(marker) {
            let end = tail.find(['/', '?']).unwrap_or(tail.len());
            return tail[..end].to_string();
        }
    }

    input.to_string()
}
