//! JSON helpers for assign-style merging.
//!
//! Partial updates on this interface are shallow: each top-level key of
//! the patch replaces the corresponding key of the target wholesale.
//! This is deliberately not RFC 7396 merge-patch. There is no recursion
//! into nested objects, and `null` is stored as a value rather than
//! treated as a deletion marker.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Shallow-merge `patch` into `target`.
///
/// Both sides must be JSON objects; any other combination leaves `target`
/// untouched.
pub fn shallow_merge(target: &mut Value, patch: &Value) {
    if let (Value::Object(target), Value::Object(patch)) = (target, patch) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Shallow-merge a JSON patch over a typed value.
///
/// Serializes `current`, assigns the patch's top-level fields, and
/// deserializes back into `T`. Fields the patch does not mention keep
/// their current values; a patch field that breaks the target type
/// surfaces as a `Serialization` error.
pub fn merge_into<T>(current: &T, patch: &Value) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(current)?;
    shallow_merge(&mut merged, patch);
    Ok(serde_json::from_value(merged)?)
}
