//! Class-variable merging.
//!
//! Class variables live on the class value only. Each class owns a copy:
//! the parent's set first, then the definition's bag on top.

use builtins::{JsValue, ObjectPrototype};
use core_types::JsResult;

/// Build a class's variable set from its parent's set and its own bag.
///
/// Later changes to the parent's set are not seen by the child.
pub fn merge_statics(parent: &JsValue, statics: Option<&JsValue>) -> JsResult<JsValue> {
    let merged = JsValue::object();
    ObjectPrototype::assign(&merged, parent)?;
    if let Some(statics) = statics {
        ObjectPrototype::assign(&merged, statics)?;
    }
    Ok(merged)
}
