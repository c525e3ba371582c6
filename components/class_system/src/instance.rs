//! Instance construction and the typed instance handle.

use builtins::{JsValue, ObjectData, ObjectPrototype};
use core_types::{JsError, JsResult};
use tracing::debug;

use crate::class::Class;

/// Allocate an instance of `class` and run the nearest initializer.
///
/// The instance links to the class's member table, so an initializer
/// inherited from any ancestor is found by ordinary lookup. It runs at most
/// once. A lineage without an initializer just allocates.
pub(crate) fn construct(class: &Class, args: Vec<JsValue>) -> JsResult<Instance> {
    let object = ObjectData::new_ref(Some(class.members().clone()));
    object.borrow_mut().constructor = Some(class.as_constructor());
    let instance = Instance {
        value: JsValue::Object(object),
        class: class.clone(),
    };

    let key = &class.reserved_keys().initializer;
    let initializer = instance.value.get(key);
    let ran = match initializer {
        None | Some(JsValue::Undefined) | Some(JsValue::Null) => false,
        Some(init) if init.is_function() => {
            init.call(instance.value.clone(), args)?;
            true
        }
        Some(other) => {
            return Err(JsError::type_error(format!(
                "initializer {} is not a function (got {})",
                key,
                other.type_of()
            )))
        }
    };
    debug!(depth = class.depth(), initializer = ran, "constructed instance");
    Ok(instance)
}

/// An object constructed from a [`Class`].
///
/// Equality is identity.
#[derive(Clone, Debug)]
pub struct Instance {
    value: JsValue,
    class: Class,
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Instance {
    /// Recover an instance from a host value.
    pub fn from_value(value: &JsValue) -> JsResult<Instance> {
        let class = match value {
            JsValue::Object(obj) => obj
                .borrow()
                .constructor
                .as_ref()
                .map(|ctor| JsValue::Constructor(ctor.clone())),
            _ => None,
        };
        match class {
            Some(class) => Ok(Instance {
                value: value.clone(),
                class: Class::from_value(&class)?,
            }),
            None => Err(JsError::type_error(format!(
                "{} is not a class instance",
                value.to_js_string()
            ))),
        }
    }

    /// The exact class this instance was constructed from (`$class`).
    pub fn class(&self) -> Class {
        self.class.clone()
    }

    /// Whether `class` is in this instance's lineage.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.value.is_instance_of(&class.to_value())
    }

    /// Read a member: own properties first, then the class lineage.
    pub fn get(&self, key: &str) -> Option<JsValue> {
        self.value.get(key)
    }

    /// Write an own property.
    pub fn set(&self, key: &str, value: JsValue) {
        self.value.set(key, value);
    }

    /// Invoke a method with this instance as receiver.
    pub fn call_method(&self, name: &str, args: Vec<JsValue>) -> JsResult<JsValue> {
        match self.value.get(name) {
            Some(method) if method.is_function() => method.call(self.value.clone(), args),
            Some(other) => Err(JsError::type_error(format!(
                "{} is not a function (got {})",
                name,
                other.type_of()
            ))),
            None => Err(JsError::type_error(format!("{} is not a function", name))),
        }
    }

    /// Own property names, in enumeration order.
    pub fn own_property_names(&self) -> Vec<String> {
        ObjectPrototype::get_own_property_names(&self.value).unwrap_or_default()
    }

    /// The instance as a host value.
    pub fn as_value(&self) -> &JsValue {
        &self.value
    }

    /// Consume the handle, keeping the host value.
    pub fn into_value(self) -> JsValue {
        self.value
    }
}
