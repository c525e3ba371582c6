//! Host object model for the class layer
//!
//! This crate provides the prototype-based values the class system is built on:
//! - `JsValue` with prototype-linked objects and ordered own properties
//! - `CallContext`, the receiver plus per-call method frame every callable sees
//! - Object / Object.prototype methods (own keys, assign, prototype walks)
//! - Function.prototype methods (call, bind)
//! - JSON object (property bags from JSON text)
//!
//! # Example
//!
//! ```
//! use builtins::{FunctionPrototype, JsValue, ObjectPrototype};
//!
//! let proto = JsValue::object_from([("greeting", JsValue::string("hi"))]);
//! let obj = ObjectPrototype::create(proto.as_object());
//!
//! // Inherited through the prototype, not an own property
//! assert_eq!(obj.get("greeting"), Some(JsValue::string("hi")));
//! assert!(ObjectPrototype::get_own_property_names(&obj).unwrap().is_empty());
//!
//! let read = JsValue::function(|ctx, _args| Ok(ctx.get("greeting").unwrap_or_default()));
//! let bound = FunctionPrototype::bind(&read, obj).unwrap();
//! assert_eq!(bound.call(JsValue::Undefined, vec![]).unwrap(), JsValue::string("hi"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod function;
pub mod json;
pub mod object;
pub mod value;

// Re-export main types for convenience
pub use function::{CallContext, FunctionPrototype, MethodFrame, NAME_KEY, SUPER_KEY};
pub use json::JSONObject;
pub use object::ObjectPrototype;
pub use value::{
    ArrayData, ConstructorObject, FunctionData, JsError, JsResult, JsValue, NativeFn, ObjectData,
    ObjectRef, PropertyMap, SELF_CLASS_KEY,
};
