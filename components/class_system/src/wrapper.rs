//! Method context wrapping.
//!
//! A wrapped method builds a fresh [`MethodFrame`] on every dispatch: its
//! own name, plus a super-invoker bound to the receiver. The frame is
//! handed to the original function through its [`CallContext`] and dropped
//! when the call returns, whichever way it returns. Nothing is stored on
//! the receiver, so nested and re-entrant calls cannot see each other's
//! frames.

use std::rc::Rc;

use builtins::{CallContext, FunctionPrototype, JsValue, MethodFrame, ObjectData, ObjectRef};
use core_types::{JsResult, StackFrame};
use tracing::trace;

/// Where a wrapped method looks for the implementation it overrides.
#[derive(Debug, Clone)]
pub enum SuperTarget {
    /// Search this member table and its ancestors for the same name
    Lineage(ObjectRef),
    /// No ancestor implementation; `$super` is a no-op
    Detached,
}

impl SuperTarget {
    /// Resolve the overridden implementation, bound to `this`.
    ///
    /// The nearest same-named member wins. A missing member, or one that is
    /// not a function, resolves to a no-op.
    fn resolve(&self, name: &str, this: &JsValue) -> JsResult<Option<JsValue>> {
        let SuperTarget::Lineage(table) = self else {
            return Ok(None);
        };
        match ObjectData::lookup(table, name) {
            Some(ancestor) if ancestor.is_function() => {
                FunctionPrototype::bind(&ancestor, this.clone()).map(Some)
            }
            _ => Ok(None),
        }
    }
}

/// Wrap `method` so every call runs inside a frame named `name`.
///
/// `depth` is the depth of the defining class and only feeds error traces.
/// Ancestor implementations found through `target` are themselves wrapped
/// members, so a super call exposes its own `$super` in turn.
pub fn wrap_method(name: &str, method: JsValue, target: SuperTarget, depth: usize) -> JsValue {
    let method_name: Rc<str> = Rc::from(name);
    JsValue::named_function(name, move |ctx: &CallContext, args: Vec<JsValue>| {
        let this = ctx.this().clone();
        let super_fn = target.resolve(&method_name, &this)?;
        trace!(
            method = %method_name,
            depth,
            has_super = super_fn.is_some(),
            "dispatching class method"
        );
        let frame = MethodFrame::new(
            method_name.clone(),
            super_fn.unwrap_or_else(FunctionPrototype::noop),
        );
        let inner = CallContext::for_method(this, frame);
        FunctionPrototype::call_in_context(&method, &inner, args)
            .map_err(|e| e.with_frame(StackFrame::method(&*method_name).at_depth(depth)))
    })
}
