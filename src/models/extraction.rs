//! Full-article extraction result

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Whatever the extraction script reported, keyed by its own `success` flag.
///
/// Only `success` is interpreted; every other field (`title`, `text`,
/// `top_image`, `authors`, ...) is passed through as the script wrote it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Reads a script-reported flag by JSON truthiness: `null`, `false`, `0`
/// and `""` are false, every other value is true.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
