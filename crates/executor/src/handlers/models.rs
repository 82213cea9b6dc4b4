//! Model catalogue handler.

use mimic_core::{Document, Result};

use crate::Output;

/// Handle `ModelList`. The catalogue is read-only reference data; no
/// command mutates it.
pub fn list(doc: &Document) -> Result<Output> {
    Ok(Output::Models(doc.llm_models.clone()))
}
