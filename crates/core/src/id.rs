//! Resource identifiers and id generation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Identifier of a resource in the document tree.
///
/// Seed data mixes integer ids (chats, agents, team members, files) with
/// string ids (the model catalogue uses "gpt-4o"), so the type is an
/// untagged union matching whatever the stored JSON carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Numeric id, serialized as a JSON number.
    Num(i64),
    /// String id, serialized as a JSON string.
    Str(String),
}

impl ResourceId {
    /// Type-tolerant comparison against a raw path segment: the segment
    /// `"5"` matches the numeric id `5` as well as the string id `"5"`.
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            ResourceId::Num(n) => segment.parse::<i64>() == Ok(*n),
            ResourceId::Str(s) => s == segment,
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Num(n) => write!(f, "{}", n),
            ResourceId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(n: i64) -> Self {
        ResourceId::Num(n)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        ResourceId::Str(s.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        ResourceId::Str(s)
    }
}

/// Issues ids for created resources.
///
/// Ids are wall-clock milliseconds bumped to stay strictly monotonic
/// within the process, so two creates landing in the same millisecond
/// cannot collide. Ids remain readable as creation timestamps.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// A fresh generator. The first issued id is the current epoch millis.
    pub fn new() -> Self {
        IdGenerator {
            last: AtomicI64::new(0),
        }
    }

    /// Issue the next id, strictly greater than every id issued before.
    pub fn next_id(&self) -> ResourceId {
        let now = crate::time::now_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return ResourceId::Num(candidate),
                Err(observed) => last = observed,
            }
        }
    }
}
