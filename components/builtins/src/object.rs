//! Object and Object.prototype methods

use std::rc::Rc;

use crate::value::{JsError, JsResult, JsValue, ObjectRef};

/// Object.prototype methods
pub struct ObjectPrototype;

impl ObjectPrototype {
    /// Object.prototype.isPrototypeOf(obj)
    pub fn is_prototype_of(proto: &JsValue, obj: &JsValue) -> JsResult<JsValue> {
        let JsValue::Object(target) = proto else {
            return Ok(JsValue::boolean(false));
        };
        let mut current = obj.get_prototype();
        while let Some(p) = current {
            if Rc::ptr_eq(target, &p) {
                return Ok(JsValue::boolean(true));
            }
            current = p.borrow().prototype.clone();
        }
        Ok(JsValue::boolean(false))
    }

    /// Object.create(proto)
    pub fn create(proto: Option<&ObjectRef>) -> JsValue {
        match proto {
            Some(proto) => JsValue::object_with_proto(proto),
            None => JsValue::object(),
        }
    }

    /// Object.getOwnPropertyNames(obj)
    pub fn get_own_property_names(obj: &JsValue) -> JsResult<Vec<String>> {
        match obj {
            JsValue::Object(_) => Ok(obj.own_keys()),
            JsValue::Undefined | JsValue::Null => Err(JsError::type_error(
                "Cannot convert undefined or null to object",
            )),
            _ => Ok(Vec::new()),
        }
    }

    /// Object.assign(target, source) for a single source.
    ///
    /// Copies the source's own properties in enumeration order. A nullish
    /// source copies nothing; any other non-object source is rejected.
    pub fn assign(target: &JsValue, source: &JsValue) -> JsResult<()> {
        let JsValue::Object(target) = target else {
            return Err(JsError::type_error(format!(
                "Object.assign target must be an object, got {}",
                target.type_of()
            )));
        };
        match source {
            JsValue::Undefined | JsValue::Null => Ok(()),
            JsValue::Object(source) => {
                // Snapshot first so assigning an object onto itself cannot
                // hold two borrows at once.
                let entries: Vec<(String, JsValue)> = source
                    .borrow()
                    .properties
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect();
                let mut target = target.borrow_mut();
                for (key, value) in entries {
                    target.properties.insert(key, value);
                }
                Ok(())
            }
            other => Err(JsError::type_error(format!(
                "expected a property bag, got {}",
                other.type_of()
            ))),
        }
    }
}
