//! Request path segmentation.
//!
//! Callers address resources with URL-shaped paths. Segmentation accepts
//! anything from a bare `"chats"` to a full
//! `"http://localhost:3000/api/chats/5?x=1"` and reduces it to the plain
//! resource segments the route table matches on.

/// Split a raw request path into its non-empty resource segments.
///
/// Normalization steps, in order:
/// 1. strip an optional `scheme://host[:port]` origin
/// 2. drop everything from the first `?` or `#` onward
/// 3. split on `/` and discard empty segments
/// 4. discard a single leading `api` segment
///
/// Segment matching is case-sensitive; `API` is not stripped.
pub fn split_segments(raw: &str) -> Vec<&str> {
    let path = strip_origin(raw);
    let end = path
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(path.len());
    let mut segments: Vec<&str> = path[..end].split('/').filter(|s| !s.is_empty()).collect();
    if segments.first() == Some(&"api") {
        segments.remove(0);
    }
    segments
}

/// Strip a leading `scheme://authority` prefix, if present.
///
/// The scheme must be non-empty ASCII alphabetic. Everything up to the
/// first `/` after `://` is treated as the authority; a URL with no path
/// component strips down to the empty string.
fn strip_origin(raw: &str) -> &str {
    if let Some(idx) = raw.find("://") {
        let scheme = &raw[..idx];
        if !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            let rest = &raw[idx + 3..];
            return match rest.find('/') {
                Some(slash) => &rest[slash..],
                None => "",
            };
        }
    }
    raw
}
