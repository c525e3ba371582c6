//! Function.prototype methods and the per-call context
//!
//! Every callable receives a [`CallContext`]: the receiver plus, while a
//! class method runs, a [`MethodFrame`] holding the method's own name and
//! its super-invoker. Frames live on the Rust call stack, so nested calls
//! on one receiver unwind in order and nothing is ever written onto the
//! receiver itself.

use std::rc::Rc;

use crate::value::{JsError, JsResult, JsValue};

/// Reserved lookup key for the running method's name
pub const NAME_KEY: &str = "$name";

/// Reserved lookup key for the running method's super-invoker
pub const SUPER_KEY: &str = "$super";

/// Per-dispatch data of a wrapped class method.
#[derive(Debug, Clone)]
pub struct MethodFrame {
    name: Rc<str>,
    super_fn: JsValue,
}

impl MethodFrame {
    /// Frame for method `name` whose overridden implementation is `super_fn`
    pub fn new(name: Rc<str>, super_fn: JsValue) -> Self {
        MethodFrame { name, super_fn }
    }

    /// Name of the running method
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Callable running the nearest ancestor implementation
    pub fn super_fn(&self) -> &JsValue {
        &self.super_fn
    }
}

/// Receiver and method frame of a single call.
#[derive(Debug, Clone)]
pub struct CallContext {
    this: JsValue,
    frame: Option<MethodFrame>,
}

impl CallContext {
    /// Context for a plain call
    pub fn new(this: JsValue) -> Self {
        CallContext { this, frame: None }
    }

    /// Context for a class method dispatch
    pub fn for_method(this: JsValue, frame: MethodFrame) -> Self {
        CallContext {
            this,
            frame: Some(frame),
        }
    }

    /// The receiver
    pub fn this(&self) -> &JsValue {
        &self.this
    }

    /// The method frame, present only inside a class method
    pub fn frame(&self) -> Option<&MethodFrame> {
        self.frame.as_ref()
    }

    /// `this.$name`
    pub fn name(&self) -> Option<&str> {
        self.frame.as_ref().map(MethodFrame::name)
    }

    /// `this.$super`
    pub fn super_fn(&self) -> Option<&JsValue> {
        self.frame.as_ref().map(MethodFrame::super_fn)
    }

    /// `this.$super(...args)`
    pub fn call_super(&self, args: Vec<JsValue>) -> JsResult<JsValue> {
        match &self.frame {
            Some(frame) => frame.super_fn.call(self.this.clone(), args),
            None => Err(JsError::type_error(
                "$super is only available while a class method is running",
            )),
        }
    }

    /// Property read as seen from inside the call.
    ///
    /// `$name` and `$super` resolve against the frame; everything else
    /// reads through the receiver.
    pub fn get(&self, key: &str) -> Option<JsValue> {
        match (key, &self.frame) {
            (NAME_KEY, Some(frame)) => Some(JsValue::string(frame.name())),
            (SUPER_KEY, Some(frame)) => Some(frame.super_fn.clone()),
            _ => self.this.get(key),
        }
    }

    /// Write a property on the receiver
    pub fn set(&self, key: &str, value: JsValue) {
        self.this.set(key, value);
    }

    /// `this[name](...args)`
    pub fn call_method(&self, name: &str, args: Vec<JsValue>) -> JsResult<JsValue> {
        let method = self.this.get(name).ok_or_else(|| {
            JsError::type_error(format!("this.{} is not a function", name))
        })?;
        method.call(self.this.clone(), args)
    }
}

/// Function.prototype methods
pub struct FunctionPrototype;

impl FunctionPrototype {
    /// Function.prototype.call(thisArg, ...args)
    pub fn call(func: &JsValue, this: JsValue, args: Vec<JsValue>) -> JsResult<JsValue> {
        Self::call_in_context(func, &CallContext::new(this), args)
    }

    /// Invoke `func` with a caller-built context
    pub fn call_in_context(func: &JsValue, ctx: &CallContext, args: Vec<JsValue>) -> JsResult<JsValue> {
        match func {
            JsValue::Function(data) => (data.func)(ctx, args),
            other => Err(JsError::type_error(format!(
                "{} is not a function",
                other.to_js_string()
            ))),
        }
    }

    /// Function.prototype.bind(thisArg)
    ///
    /// The returned function ignores the receiver it is later called with.
    pub fn bind(func: &JsValue, this: JsValue) -> JsResult<JsValue> {
        let JsValue::Function(data) = func else {
            return Err(JsError::type_error(format!(
                "Bind must be called on a function, got {}",
                func.type_of()
            )));
        };
        let target = func.clone();
        let name = data.name.as_ref().map(|n| format!("bound {}", n));
        let bound = move |_ctx: &CallContext, args: Vec<JsValue>| {
            target.call(this.clone(), args)
        };
        Ok(match name {
            Some(name) => JsValue::named_function(name, bound),
            None => JsValue::function(bound),
        })
    }

    /// A function that ignores its arguments and returns undefined
    pub fn noop() -> JsValue {
        JsValue::function(|_, _| Ok(JsValue::Undefined))
    }
}
