//! JSON documents (form payloads, blog content, tag lists...) are kept as
//! serialized text in the database and written back out as embedded JSON.

use serde::{Serialize, Serializer};
use serde_json::Value;
use validator::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Object,
    Array,
}

impl Fallback {
    fn as_str(self) -> &'static str {
        match self {
            Fallback::Object => "{}",
            Fallback::Array => "[]",
        }
    }
}

/// Serializes a client-supplied document for storage. Missing or `null`
/// documents are stored as the empty fallback.
pub fn encode(value: Option<&Value>, fallback: Fallback) -> String {
    match value {
        None | Some(Value::Null) => fallback.as_str().to_string(),
        Some(value) => {
            serde_json::to_string(value).unwrap_or_else(|_| fallback.as_str().to_string())
        }
    }
}

/// `serialize_with` target for text columns holding JSON. Text that does not
/// parse is emitted as a plain string.
pub fn serialize<T, S>(text: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<str> + ?Sized,
    S: Serializer,
{
    match serde_json::from_str::<Value>(text.as_ref()) {
        Ok(value) => value.serialize(serializer),
        Err(_) => serializer.serialize_str(text.as_ref()),
    }
}

pub fn require_document(value: &Value) -> Result<(), ValidationError> {
    if value.is_null() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
