//! Contract tests for class variables

use builtins::JsValue;
use class_system::{merge_statics, Class};

fn with_statics(parent: &Class, statics: JsValue) -> Class {
    parent
        .extend(Some(&JsValue::object_from([("__classvars__", statics)])))
        .unwrap()
}

#[test]
fn test_statics_live_on_class_only() {
    let cls = with_statics(
        &Class::root(),
        JsValue::object_from([("static1", JsValue::string("static1"))]),
    );
    let obj = cls.new_instance(vec![]).unwrap();

    assert_eq!(cls.get_static("static1"), Some(JsValue::string("static1")));
    assert_eq!(cls.to_value().get("static1"), Some(JsValue::string("static1")));
    assert!(cls.prototype().get("static1").is_none());
    assert!(obj.get("static1").is_none());
}

#[test]
fn test_statics_are_inherited() {
    let parent = with_statics(
        &Class::root(),
        JsValue::object_from([("static1", JsValue::string("static1"))]),
    );
    let child = parent.extend(None).unwrap();
    let obj = child.new_instance(vec![]).unwrap();

    assert_eq!(child.get_static("static1"), Some(JsValue::string("static1")));
    assert!(child.prototype().get("static1").is_none());
    assert!(obj.get("static1").is_none());
}

#[test]
fn test_statics_can_be_overridden() {
    let parent = with_statics(
        &Class::root(),
        JsValue::object_from([
            ("static1", JsValue::string("static1")),
            ("other", JsValue::number(1.0)),
        ]),
    );
    let child = with_statics(
        &parent,
        JsValue::object_from([("static1", JsValue::string("static2"))]),
    );

    assert_eq!(child.get_static("static1"), Some(JsValue::string("static2")));
    assert_eq!(parent.get_static("static1"), Some(JsValue::string("static1")));
    assert_eq!(child.static_names(), vec!["static1", "other"]);
}

#[test]
fn test_child_statics_are_a_copy() {
    let parent = with_statics(
        &Class::root(),
        JsValue::object_from([("n", JsValue::number(1.0))]),
    );
    let child = parent.extend(None).unwrap();
    child.set_static("n", JsValue::number(2.0));

    assert_eq!(parent.get_static("n"), Some(JsValue::number(1.0)));
    assert_eq!(child.get_static("n"), Some(JsValue::number(2.0)));
}

#[test]
fn test_merge_statics_standalone() {
    let parent = JsValue::object_from([("a", JsValue::number(1.0))]);
    let bag = JsValue::object_from([("b", JsValue::number(2.0)), ("a", JsValue::number(3.0))]);
    let merged = merge_statics(&parent, Some(&bag)).unwrap();

    assert_eq!(merged.own_keys(), vec!["a", "b"]);
    assert_eq!(merged.get("a"), Some(JsValue::number(3.0)));
    assert_eq!(parent.get("a"), Some(JsValue::number(1.0)));
}
