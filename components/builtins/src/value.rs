//! JavaScript value representation for the object model
//!
//! This module provides the host value type the class layer is built on:
//! prototype-linked objects with ordered own properties, callables that
//! receive a [`CallContext`], and constructor values behind the
//! [`ConstructorObject`] seam.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::function::CallContext;

pub use core_types::{JsError, JsResult};

/// Property under which a constructed object exposes the class that built it
pub const SELF_CLASS_KEY: &str = "$class";

/// Shared handle to an object's data
pub type ObjectRef = Rc<RefCell<ObjectData>>;

/// Signature of every callable: receives its call context and arguments
pub type NativeFn = dyn Fn(&CallContext, Vec<JsValue>) -> JsResult<JsValue>;

/// Ordered own-property storage.
///
/// Enumeration follows insertion order. Overwriting a key keeps the
/// position it was first inserted at.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    entries: Vec<(String, JsValue)>,
}

impl PropertyMap {
    /// Create an empty map
    pub fn new() -> Self {
        PropertyMap {
            entries: Vec::new(),
        }
    }

    /// Number of own properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no own properties
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Get a property by key
    pub fn get(&self, key: &str) -> Option<&JsValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert or overwrite, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: JsValue) -> Option<JsValue> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Keys in enumeration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, JsValue)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, JsValue)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Internal object data
#[derive(Debug, Default)]
pub struct ObjectData {
    /// Own properties in insertion order
    pub properties: PropertyMap,
    /// Optional prototype reference
    pub prototype: Option<ObjectRef>,
    /// Constructor that allocated this object, if any
    pub constructor: Option<Rc<dyn ConstructorObject>>,
}

impl ObjectData {
    /// Allocate an empty object linked to `prototype`
    pub fn new_ref(prototype: Option<ObjectRef>) -> ObjectRef {
        Rc::new(RefCell::new(ObjectData {
            prototype,
            ..ObjectData::default()
        }))
    }

    /// Resolve a property through the prototype chain.
    ///
    /// Own properties win, then the constructor self-reference, then each
    /// prototype in turn.
    pub fn lookup(obj: &ObjectRef, key: &str) -> Option<JsValue> {
        let mut current = Some(obj.clone());
        while let Some(object) = current {
            let data = object.borrow();
            if let Some(value) = data.properties.get(key) {
                return Some(value.clone());
            }
            if key == SELF_CLASS_KEY {
                if let Some(ctor) = &data.constructor {
                    return Some(JsValue::Constructor(ctor.clone()));
                }
            }
            current = data.prototype.clone();
        }
        None
    }
}

/// Internal array data
#[derive(Debug, Clone, Default)]
pub struct ArrayData {
    /// Array elements
    pub elements: Vec<JsValue>,
}

/// Internal function data
pub struct FunctionData {
    /// Function name, if it has one
    pub name: Option<String>,
    /// The function implementation
    pub func: Box<NativeFn>,
}

impl fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionData")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A value that can be constructed with `new`.
///
/// Implemented by the class layer; the host model only needs to reach the
/// member table instances link to, the class-level properties, and the
/// construction entry point.
pub trait ConstructorObject: fmt::Debug {
    /// Member table that constructed objects use as their prototype
    fn prototype(&self) -> ObjectRef;

    /// Class-level property lookup
    fn get_static(&self, key: &str) -> Option<JsValue>;

    /// Allocate and initialize a new object
    fn construct(&self, args: Vec<JsValue>) -> JsResult<JsValue>;

    /// Downcasting hook for owners of concrete constructor types
    fn as_any(&self) -> &dyn Any;
}

/// JavaScript value representation
#[derive(Clone)]
pub enum JsValue {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// String value
    String(String),
    /// Object with properties
    Object(ObjectRef),
    /// Array
    Array(Rc<RefCell<ArrayData>>),
    /// Function object
    Function(Rc<FunctionData>),
    /// Constructor object
    Constructor(Rc<dyn ConstructorObject>),
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "Undefined"),
            JsValue::Null => write!(f, "Null"),
            JsValue::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            JsValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            JsValue::String(s) => f.debug_tuple("String").field(s).finish(),
            JsValue::Object(obj) => {
                let keys: Vec<String> = obj.borrow().properties.keys().map(String::from).collect();
                f.debug_tuple("Object").field(&keys).finish()
            }
            JsValue::Array(arr) => f.debug_tuple("Array").field(&arr.borrow().elements).finish(),
            JsValue::Function(func) => f.debug_tuple("Function").field(&func.name).finish(),
            JsValue::Constructor(ctor) => f.debug_tuple("Constructor").field(ctor).finish(),
        }
    }
}

impl JsValue {
    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        JsValue::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        JsValue::Number(v)
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        JsValue::String(s.into())
    }

    /// Create empty object
    pub fn object() -> Self {
        JsValue::Object(ObjectData::new_ref(None))
    }

    /// Create object with prototype
    pub fn object_with_proto(proto: &ObjectRef) -> Self {
        JsValue::Object(ObjectData::new_ref(Some(proto.clone())))
    }

    /// Create a plain object from key/value pairs, keeping their order
    pub fn object_from<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, JsValue)>,
    {
        JsValue::Object(Rc::new(RefCell::new(ObjectData {
            properties: entries.into_iter().collect(),
            ..ObjectData::default()
        })))
    }

    /// Create an anonymous function value
    pub fn function<F>(func: F) -> Self
    where
        F: Fn(&CallContext, Vec<JsValue>) -> JsResult<JsValue> + 'static,
    {
        JsValue::Function(Rc::new(FunctionData {
            name: None,
            func: Box::new(func),
        }))
    }

    /// Create a named function value
    pub fn named_function<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&CallContext, Vec<JsValue>) -> JsResult<JsValue> + 'static,
    {
        JsValue::Function(Rc::new(FunctionData {
            name: Some(name.into()),
            func: Box::new(func),
        }))
    }

    /// Create empty array
    pub fn array() -> Self {
        JsValue::Array(Rc::new(RefCell::new(ArrayData::default())))
    }

    /// Create array from values
    pub fn array_from(values: Vec<JsValue>) -> Self {
        JsValue::Array(Rc::new(RefCell::new(ArrayData { elements: values })))
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// Check if value is object
    pub fn is_object(&self) -> bool {
        matches!(self, JsValue::Object(_))
    }

    /// Check if value is a function
    pub fn is_function(&self) -> bool {
        matches!(self, JsValue::Function(_))
    }

    /// ToBoolean
    pub fn is_truthy(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Boolean(b) => *b,
            JsValue::Number(n) => *n != 0.0 && !n.is_nan(),
            JsValue::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string
    pub fn as_string(&self) -> Option<String> {
        match self {
            JsValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Get the object handle
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            JsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get the constructor handle
    pub fn as_constructor(&self) -> Option<&Rc<dyn ConstructorObject>> {
        match self {
            JsValue::Constructor(ctor) => Some(ctor),
            _ => None,
        }
    }

    /// Snapshot of array elements
    pub fn array_elements(&self) -> Option<Vec<JsValue>> {
        match self {
            JsValue::Array(arr) => Some(arr.borrow().elements.clone()),
            _ => None,
        }
    }

    /// Set object property
    pub fn set(&self, key: &str, value: JsValue) {
        if let JsValue::Object(obj) = self {
            obj.borrow_mut().properties.insert(key, value);
        }
    }

    /// Get property, walking the prototype chain
    pub fn get(&self, key: &str) -> Option<JsValue> {
        match self {
            JsValue::Object(obj) => ObjectData::lookup(obj, key),
            JsValue::Constructor(ctor) => ctor.get_static(key),
            JsValue::Function(func) if key == "name" => {
                Some(JsValue::string(func.name.clone().unwrap_or_default()))
            }
            JsValue::Array(arr) if key == "length" => {
                Some(JsValue::number(arr.borrow().elements.len() as f64))
            }
            _ => None,
        }
    }

    /// Get own property only
    pub fn get_own(&self, key: &str) -> Option<JsValue> {
        match self {
            JsValue::Object(obj) => obj.borrow().properties.get(key).cloned(),
            _ => None,
        }
    }

    /// Check if object has own property
    pub fn has_own(&self, key: &str) -> bool {
        match self {
            JsValue::Object(obj) => obj.borrow().properties.contains_key(key),
            _ => false,
        }
    }

    /// Own property keys in enumeration order
    pub fn own_keys(&self) -> Vec<String> {
        match self {
            JsValue::Object(obj) => obj.borrow().properties.keys().map(String::from).collect(),
            _ => Vec::new(),
        }
    }

    /// Get object prototype
    pub fn get_prototype(&self) -> Option<ObjectRef> {
        match self {
            JsValue::Object(obj) => obj.borrow().prototype.clone(),
            _ => None,
        }
    }

    /// Invoke this value as a function with the given receiver
    pub fn call(&self, this: JsValue, args: Vec<JsValue>) -> JsResult<JsValue> {
        crate::function::FunctionPrototype::call(self, this, args)
    }

    /// `new` this value with the given arguments
    pub fn construct(&self, args: Vec<JsValue>) -> JsResult<JsValue> {
        match self {
            JsValue::Constructor(ctor) => ctor.construct(args),
            other => Err(JsError::type_error(format!(
                "{} is not a constructor",
                other.to_js_string()
            ))),
        }
    }

    /// `instanceof`: whether the constructor's member table is on this
    /// value's prototype chain
    pub fn is_instance_of(&self, ctor: &JsValue) -> bool {
        let (JsValue::Object(_), JsValue::Constructor(ctor)) = (self, ctor) else {
            return false;
        };
        let target = ctor.prototype();
        let mut current = self.get_prototype();
        while let Some(proto) = current {
            if Rc::ptr_eq(&proto, &target) {
                return true;
            }
            current = proto.borrow().prototype.clone();
        }
        false
    }

    /// ToString, as used in messages and string building
    pub fn to_js_string(&self) -> String {
        self.to_string()
    }

    /// Get the type of the value (as JavaScript typeof would return)
    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Null => "object",
            JsValue::Boolean(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Object(_) | JsValue::Array(_) => "object",
            JsValue::Function(_) | JsValue::Constructor(_) => "function",
        }
    }
}

impl Default for JsValue {
    fn default() -> Self {
        JsValue::Undefined
    }
}

/// Strict equality: primitives by value, everything else by identity.
impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) | (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            (JsValue::Array(a), JsValue::Array(b)) => Rc::ptr_eq(a, b),
            (JsValue::Function(a), JsValue::Function(b)) => Rc::ptr_eq(a, b),
            (JsValue::Constructor(a), JsValue::Constructor(b)) => {
                Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => f.write_str("undefined"),
            JsValue::Null => f.write_str("null"),
            JsValue::Boolean(b) => write!(f, "{}", b),
            // Integral numbers print without a fraction, like `String(3)`.
            JsValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            JsValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            JsValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            JsValue::Number(n) => write!(f, "{}", n),
            JsValue::String(s) => f.write_str(s),
            JsValue::Object(_) => f.write_str("[object Object]"),
            JsValue::Array(arr) => {
                let parts: Vec<String> = arr.borrow().elements.iter().map(|e| e.to_string()).collect();
                f.write_str(&parts.join(","))
            }
            JsValue::Function(func) => {
                write!(f, "function {}() {{ [native code] }}", func.name.as_deref().unwrap_or(""))
            }
            JsValue::Constructor(_) => f.write_str("class { [native code] }"),
        }
    }
}
