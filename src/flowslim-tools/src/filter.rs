//! Pure narrowing of the workflow schema to the ID-based variant.

use serde_json::{Value, json};

/// Property list required by the surviving `oneOf` alternative.
pub const ID_WORKFLOW_REQUIRED: [&str; 3] = ["id", "specVersion", "states"];

/// Description put on the filtered schema when the original carried one.
pub const FILTERED_DESCRIPTION: &str =
    "Serverless Workflow specification - workflow schema (ID-based workflows only)";

/// Narrow a workflow schema to the ID-based variant.
///
/// Works on a copy, so the caller's document stays usable for the
/// "original" side of the reduction statistics. Three edits, each gated
/// on the key being present:
///
/// - `properties.key` is removed
/// - `oneOf` is replaced with the single ID-based alternative
/// - `description` is replaced with [FILTERED_DESCRIPTION]
///
/// Shared definitions and everything else pass through unchanged. Any
/// well-formed JSON value is accepted and the function is idempotent.
pub fn filter_for_id_workflows(schema: &Value) -> Value {
    let mut filtered = schema.clone();

    if let Some(properties) = filtered.get_mut("properties").and_then(Value::as_object_mut) {
        properties.remove("key");
    }

    if let Some(one_of) = filtered.get_mut("oneOf") {
        *one_of = json!([{ "required": ID_WORKFLOW_REQUIRED }]);
    }

    if let Some(description) = filtered.get_mut("description") {
        *description = Value::String(FILTERED_DESCRIPTION.to_string());
    }

    filtered
}
