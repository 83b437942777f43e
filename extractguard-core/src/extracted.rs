//! The field/value mapping produced by an upstream extraction model, and the
//! rules for deciding whether an extracted value is "there" at all.

use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::errors::{ExtractGuardError, Result};

/// Field name to extracted value, exactly as the model returned it.
pub type ExtractedData = Map<String, Value>;

/// The literal marker some models emit instead of a JSON `null`.
pub const NULL_MARKER: &str = "null";

/// JSON truthiness: `null`, `""`, `false`, zero, `[]` and `{}` are empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// A value counts as extracted when it is truthy and not the `"null"` marker.
pub fn has_value(value: &Value) -> bool {
    is_truthy(value) && value.as_str() != Some(NULL_MARKER)
}

/// Coerces any extracted value to the text used for matching.
///
/// Strings are borrowed as-is; everything else uses its compact JSON form.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Parses a model response into [`ExtractedData`].
///
/// Fails with [`ExtractGuardError::Parse`] for malformed JSON and
/// [`ExtractGuardError::NotAnObject`] when the top level is not an object.
pub fn parse_extracted_data(model_response: &str) -> Result<ExtractedData> {
    match serde_json::from_str::<Value>(model_response)? {
        Value::Object(map) => Ok(map),
        other => Err(ExtractGuardError::NotAnObject(json_kind(&other).to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
