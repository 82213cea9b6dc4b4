//! Pipe-mode line parsing.
//!
//! Each non-empty line is `VERB PATH [JSON]`. The payload is the rest of
//! the line after the path, so JSON with spaces needs no quoting:
//!
//! ```text
//! GET /api/chats
//! POST /api/chats/3/messages {"sender": "operator", "text": "On it."}
//! # comment lines and blanks are skipped
//! ```

use mimic_executor::{Error, Result, Verb};
use serde_json::Value;

/// One parsed request line.
pub struct Request {
    /// Parsed verb token.
    pub verb: Verb,
    /// Resource path, passed through untouched.
    pub path: String,
    /// Payload from the rest of the line, if any.
    pub payload: Option<Value>,
}

/// Parse a single pipe-mode line. Blank lines and `#` comments parse to
/// `None`.
pub fn parse_line(line: &str) -> Result<Option<Request>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (verb_token, rest) = match trimmed.split_once(|c: char| c.is_whitespace()) {
        Some((token, rest)) => (token, rest.trim_start()),
        None => (trimmed, ""),
    };
    let verb: Verb = verb_token.parse()?;

    if rest.is_empty() {
        return Err(Error::internal(format!("missing path in '{}'", trimmed)));
    }
    let (path, payload_text) = match rest.split_once(|c: char| c.is_whitespace()) {
        Some((path, rest)) => (path, rest.trim()),
        None => (rest, ""),
    };

    let payload = if payload_text.is_empty() {
        None
    } else {
        Some(serde_json::from_str(payload_text)?)
    };

    Ok(Some(Request {
        verb,
        path: path.to_string(),
        payload,
    }))
}
