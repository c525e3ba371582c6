//! Contract tests for mixin inclusion

use builtins::JsValue;
use class_system::{merge_mixins, Class};
use core_types::ErrorKind;

fn with_mixins(mixins: Vec<JsValue>, members: Vec<(&str, JsValue)>) -> Class {
    let mut entries = vec![("__include__", JsValue::array_from(mixins))];
    entries.extend(members);
    Class::root().extend(Some(&JsValue::object_from(entries))).unwrap()
}

#[test]
fn test_mixin_members_land_on_table() {
    let cls = with_mixins(
        vec![JsValue::object_from([
            ("meth1", JsValue::function(|_, _| Ok(JsValue::Undefined))),
            ("attr1", JsValue::string("foo")),
        ])],
        vec![],
    );
    assert!(cls.prototype().get_own("meth1").is_some_and(|m| m.is_function()));
    assert_eq!(cls.prototype().get("attr1"), Some(JsValue::string("foo")));
}

#[test]
fn test_explicit_member_beats_mixin() {
    let cls = with_mixins(
        vec![JsValue::object_from([("attr1", JsValue::string("inc"))])],
        vec![("attr1", JsValue::string("prop"))],
    );
    assert_eq!(cls.prototype().get("attr1"), Some(JsValue::string("prop")));
}

#[test]
fn test_explicit_member_beats_mixins_in_any_order() {
    let inc1 = || JsValue::object_from([("attr1", JsValue::string("inc1"))]);
    let inc2 = || JsValue::object_from([("attr1", JsValue::string("inc2"))]);

    for mixins in [vec![inc1(), inc2()], vec![inc2(), inc1()]] {
        let cls = with_mixins(mixins, vec![("attr1", JsValue::string("prop"))]);
        assert_eq!(cls.prototype().get("attr1"), Some(JsValue::string("prop")));
        assert_eq!(
            cls.new_instance(vec![]).unwrap().get("attr1"),
            Some(JsValue::string("prop"))
        );
    }
}

#[test]
fn test_last_mixin_wins() {
    let cls = with_mixins(
        vec![
            JsValue::object_from([("attr1", JsValue::string("inc1"))]),
            JsValue::object_from([("attr1", JsValue::string("inc2"))]),
        ],
        vec![],
    );
    assert_eq!(cls.prototype().get("attr1"), Some(JsValue::string("inc2")));
}

#[test]
fn test_mixin_method_sees_name_and_noop_super() {
    let parent = Class::root()
        .extend(Some(&JsValue::object_from([(
            "greet",
            JsValue::function(|_, _| Ok(JsValue::string("parent"))),
        )])))
        .unwrap();
    let cls = parent
        .extend(Some(&JsValue::object_from([(
            "__include__",
            JsValue::array_from(vec![JsValue::object_from([(
                "greet",
                JsValue::function(|ctx, _| {
                    let up = ctx.call_super(vec![])?;
                    Ok(JsValue::string(format!(
                        "{}:{}",
                        ctx.name().unwrap_or_default(),
                        up.to_js_string()
                    )))
                }),
            )])]),
        )])))
        .unwrap();

    let obj = cls.new_instance(vec![]).unwrap();
    assert_eq!(obj.call_method("greet", vec![]).unwrap(), JsValue::string("greet:undefined"));
}

#[test]
fn test_mixin_bags_are_not_modified() {
    let mixin = JsValue::object_from([("m", JsValue::function(|_, _| Ok(JsValue::Undefined)))]);
    let original = mixin.get_own("m").unwrap();
    let cls = with_mixins(vec![mixin.clone()], vec![]);

    assert_eq!(mixin.get_own("m"), Some(original.clone()));
    assert_ne!(cls.prototype().get_own("m"), Some(original));
}

#[test]
fn test_non_object_mixin_entry_rejected() {
    let bag = JsValue::object_from([(
        "__include__",
        JsValue::array_from(vec![JsValue::Null]),
    )]);
    let err = Class::root().extend(Some(&bag)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
}

#[test]
fn test_merge_mixins_standalone() {
    let target = JsValue::object_from([("keep", JsValue::boolean(true))]);
    let added = merge_mixins(
        &[JsValue::object_from([("x", JsValue::number(1.0))])],
        &target,
    )
    .unwrap();
    assert_eq!(added, vec!["x"]);
    assert_eq!(target.own_keys(), vec!["keep", "x"]);
}
