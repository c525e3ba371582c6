//! Splitting a definition bag into its three tiers' inputs.

use builtins::JsValue;
use core_types::{JsError, JsResult};

use crate::config::ReservedKeys;

/// A definition bag with its directives pulled out.
#[derive(Debug)]
pub(crate) struct Definition {
    /// Mixin bags in list order; entries are validated when merged
    pub mixins: Vec<JsValue>,
    /// Class-variable bag, if one was given
    pub statics: Option<JsValue>,
    /// Every other key, in bag order, as a plain bag
    pub members: JsValue,
}

impl Default for Definition {
    fn default() -> Self {
        Definition {
            mixins: Vec::new(),
            statics: None,
            members: JsValue::object(),
        }
    }
}

impl Definition {
    /// An omitted (`None`, `undefined`, `null`) bag behaves as empty.
    pub fn parse(bag: Option<&JsValue>, keys: &ReservedKeys) -> JsResult<Self> {
        let bag = match bag {
            None | Some(JsValue::Undefined) | Some(JsValue::Null) => {
                return Ok(Definition::default())
            }
            Some(JsValue::Object(obj)) => obj,
            Some(other) => {
                return Err(JsError::type_error(format!(
                    "class definition must be an object, got {}",
                    other.type_of()
                )))
            }
        };

        let mut definition = Definition::default();
        for (key, value) in bag.borrow().properties.iter() {
            if !keys.is_directive(key) {
                definition.members.set(key, value.clone());
            } else if key == keys.mixins {
                definition.mixins = Self::mixin_list(key, value)?;
            } else {
                definition.statics = Self::statics_bag(key, value)?;
            }
        }
        Ok(definition)
    }

    fn mixin_list(key: &str, value: &JsValue) -> JsResult<Vec<JsValue>> {
        match value {
            JsValue::Undefined | JsValue::Null => Ok(Vec::new()),
            JsValue::Array(_) => Ok(value.array_elements().unwrap_or_default()),
            other => Err(JsError::type_error(format!(
                "{} must be a list of property bags, got {}",
                key,
                other.type_of()
            ))),
        }
    }

    fn statics_bag(key: &str, value: &JsValue) -> JsResult<Option<JsValue>> {
        match value {
            JsValue::Undefined | JsValue::Null => Ok(None),
            JsValue::Object(_) => Ok(Some(value.clone())),
            other => Err(JsError::type_error(format!(
                "{} must be a property bag, got {}",
                key,
                other.type_of()
            ))),
        }
    }
}
