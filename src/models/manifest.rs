//! Manifest data structure

use serde::Deserialize;
use serde_json::{Map, Value};

/// The extension manifest. Only `version` is interpreted.
///
/// Keys are kept in a plain JSON map, so a repeated key keeps its last value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub fields: Map<String, Value>,
}

impl Manifest {
    pub fn version(&self) -> Option<&Value> {
        self.fields.get("version")
    }

    /// The `version` field as text, trimmed.
    ///
    /// Returns `Ok(None)` when the field is missing, `null`, blank or a
    /// numeric zero, and `Err` with the JSON type name when it cannot be read
    /// as a version.
    pub fn version_text(&self) -> Result<Option<String>, &'static str> {
        let text = match self.version() {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => return Ok(None),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(_)) => return Err("boolean"),
            Some(Value::Array(_)) => return Err("array"),
            Some(Value::Object(_)) => return Err("object"),
        };

        if text.is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }
}
