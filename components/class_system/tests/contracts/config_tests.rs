//! Contract tests for reserved-key configuration

use builtins::JsValue;
use class_system::{Class, ReservedKeys};
use core_types::ErrorKind;

#[test]
fn test_custom_keys_drive_the_factory() {
    let keys = ReservedKeys::from_json(
        r#"{"initializer": "init", "mixins": "include", "statics": "classvars"}"#,
    )
    .unwrap();
    let root = Class::root_with(keys).unwrap();

    let cls = root
        .extend(Some(&JsValue::object_from([
            (
                "init",
                JsValue::function(|ctx, _| {
                    ctx.set("ready", JsValue::boolean(true));
                    Ok(JsValue::Undefined)
                }),
            ),
            (
                "include",
                JsValue::array_from(vec![JsValue::object_from([("mixed", JsValue::number(1.0))])]),
            ),
            ("classvars", JsValue::object_from([("kind", JsValue::string("custom"))])),
            ("__include__", JsValue::string("just a member")),
        ])))
        .unwrap();

    let obj = cls.new_instance(vec![]).unwrap();
    assert_eq!(obj.get("ready"), Some(JsValue::boolean(true)));
    assert_eq!(obj.get("mixed"), Some(JsValue::number(1.0)));
    assert_eq!(obj.get("__include__"), Some(JsValue::string("just a member")));
    assert_eq!(cls.get_static("kind"), Some(JsValue::string("custom")));
    assert_eq!(cls.reserved_keys().initializer, "init");
}

#[test]
fn test_subclasses_share_root_keys() {
    let keys = ReservedKeys {
        initializer: "setup".to_string(),
        ..ReservedKeys::default()
    };
    let root = Class::root_with(keys.clone()).unwrap();
    let grandchild = root.extend(None).unwrap().extend(None).unwrap();
    assert_eq!(grandchild.reserved_keys(), &keys);
    assert_eq!(grandchild.lineage().last(), Some(&root));
}

#[test]
fn test_invalid_json_is_syntax_error() {
    let err = ReservedKeys::from_json("{initializer").unwrap_err();
    assert_eq!(err.kind, ErrorKind::SyntaxError);
}

#[test]
fn test_duplicate_keys_rejected() {
    let keys = ReservedKeys {
        statics: "__init__".to_string(),
        ..ReservedKeys::default()
    };
    assert_eq!(Class::root_with(keys).unwrap_err().kind, ErrorKind::RangeError);
}
