//! Contract tests for FunctionPrototype and CallContext

use std::rc::Rc;

use builtins::{CallContext, FunctionPrototype, JsValue, MethodFrame, NAME_KEY, SUPER_KEY};
use core_types::ErrorKind;

#[test]
fn test_call_with_arguments() {
    let sum = JsValue::function(|_, args| {
        Ok(JsValue::number(args.iter().filter_map(JsValue::as_number).sum()))
    });
    let result = FunctionPrototype::call(
        &sum,
        JsValue::Undefined,
        vec![JsValue::number(1.0), JsValue::number(2.0)],
    )
    .unwrap();
    assert_eq!(result, JsValue::number(3.0));
}

#[test]
fn test_call_propagates_errors() {
    let fails = JsValue::function(|_, _| Err(core_types::JsError::range_error("nope")));
    let err = fails.call(JsValue::Undefined, vec![]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::RangeError);
}

#[test]
fn test_bind_non_function_is_type_error() {
    let err = FunctionPrototype::bind(&JsValue::object(), JsValue::Undefined).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
}

#[test]
fn test_bound_function_receives_plain_context() {
    let probe = JsValue::function(|ctx, _| Ok(JsValue::boolean(ctx.frame().is_none())));
    let bound = FunctionPrototype::bind(&probe, JsValue::object()).unwrap();
    assert_eq!(bound.call(JsValue::Undefined, vec![]).unwrap(), JsValue::boolean(true));
}

#[test]
fn test_call_method_dispatches_on_receiver() {
    let obj = JsValue::object();
    obj.set(
        "answer",
        JsValue::function(|_, _| Ok(JsValue::number(42.0))),
    );
    let ctx = CallContext::new(obj);
    assert_eq!(ctx.call_method("answer", vec![]).unwrap(), JsValue::number(42.0));

    let err = ctx.call_method("missing", vec![]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
}

#[test]
fn test_call_super_runs_frame_target_on_same_receiver() {
    let target = JsValue::function(|ctx, args| {
        ctx.set("from_super", args.into_iter().next().unwrap_or_default());
        Ok(JsValue::Undefined)
    });
    let this = JsValue::object();
    let ctx = CallContext::for_method(this.clone(), MethodFrame::new(Rc::from("m"), target));

    ctx.call_super(vec![JsValue::string("x")]).unwrap();
    assert_eq!(this.get("from_super"), Some(JsValue::string("x")));
    assert!(this.get(SUPER_KEY).is_none());
    assert!(this.get(NAME_KEY).is_none());
}
