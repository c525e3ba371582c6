//! JSON object methods
//!
//! Parsing keeps object keys in document order, so a definition bag loaded
//! from JSON enumerates exactly as written.

use crate::value::{JsError, JsResult, JsValue};

/// JSON object with static methods
pub struct JSONObject;

impl JSONObject {
    /// JSON.parse(text)
    pub fn parse(text: &str) -> JsResult<JsValue> {
        let json_value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| JsError::syntax_error(format!("JSON parse error: {}", e)))?;

        Ok(Self::json_to_js_value(&json_value))
    }

    /// JSON.stringify(value)
    ///
    /// Functions and constructors are skipped inside objects, as in
    /// JavaScript; a top-level function or `undefined` yields `None`.
    pub fn stringify(value: &JsValue) -> JsResult<Option<String>> {
        let Some(json_value) = Self::js_value_to_json(value) else {
            return Ok(None);
        };
        serde_json::to_string(&json_value)
            .map(Some)
            .map_err(|e| JsError::internal_error(format!("JSON stringify error: {}", e)))
    }

    /// Convert serde_json::Value to JsValue
    pub fn json_to_js_value(json: &serde_json::Value) -> JsValue {
        match json {
            serde_json::Value::Null => JsValue::Null,
            serde_json::Value::Bool(b) => JsValue::boolean(*b),
            serde_json::Value::Number(n) => JsValue::number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => JsValue::string(s.clone()),
            serde_json::Value::Array(arr) => {
                JsValue::array_from(arr.iter().map(Self::json_to_js_value).collect())
            }
            serde_json::Value::Object(obj) => JsValue::object_from(
                obj.iter()
                    .map(|(key, val)| (key.clone(), Self::json_to_js_value(val))),
            ),
        }
    }

    fn js_value_to_json(value: &JsValue) -> Option<serde_json::Value> {
        match value {
            JsValue::Undefined | JsValue::Function(_) | JsValue::Constructor(_) => None,
            JsValue::Null => Some(serde_json::Value::Null),
            JsValue::Boolean(b) => Some(serde_json::Value::Bool(*b)),
            JsValue::Number(n) => Some(
                serde_json::Number::from_f64(*n)
                    .map(|n| {
                        // Whole numbers print without a trailing ".0"
                        match n.as_f64() {
                            Some(f) if f == f.trunc() && f.abs() < 1e15 => {
                                serde_json::Value::from(f as i64)
                            }
                            _ => serde_json::Value::Number(n),
                        }
                    })
                    .unwrap_or(serde_json::Value::Null),
            ),
            JsValue::String(s) => Some(serde_json::Value::String(s.clone())),
            JsValue::Array(arr) => Some(serde_json::Value::Array(
                arr.borrow()
                    .elements
                    .iter()
                    .map(|e| Self::js_value_to_json(e).unwrap_or(serde_json::Value::Null))
                    .collect(),
            )),
            JsValue::Object(obj) => {
                let mut map = serde_json::Map::new();
                for (key, val) in obj.borrow().properties.iter() {
                    if let Some(json) = Self::js_value_to_json(val) {
                        map.insert(key.to_string(), json);
                    }
                }
                Some(serde_json::Value::Object(map))
            }
        }
    }
}
