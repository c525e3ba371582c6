//! Unit tests for JsError and ErrorKind

use core_types::{ErrorKind, JsError, JsResult, StackFrame};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_type_error() {
        let kind = ErrorKind::TypeError;
        assert!(matches!(kind, ErrorKind::TypeError));
        assert_eq!(kind.to_string(), "TypeError");
    }

    #[test]
    fn test_error_kind_copy_and_eq() {
        let kind1 = ErrorKind::RangeError;
        let kind2 = kind1;
        assert_eq!(kind1, kind2);
        assert_ne!(kind1, ErrorKind::SyntaxError);
    }
}

#[cfg(test)]
mod js_error_tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(JsError::type_error("x").kind, ErrorKind::TypeError);
        assert_eq!(JsError::syntax_error("x").kind, ErrorKind::SyntaxError);
        assert_eq!(JsError::reference_error("x").kind, ErrorKind::ReferenceError);
        assert_eq!(JsError::range_error("x").kind, ErrorKind::RangeError);
        assert_eq!(JsError::internal_error("x").kind, ErrorKind::InternalError);
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let error = JsError::type_error("Cls1 is not a class");
        assert_eq!(format!("{}", error), "TypeError: Cls1 is not a class");
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&JsError::internal_error("x"));
    }

    #[test]
    fn test_push_frame_preserves_order() {
        let mut error = JsError::type_error("boom");
        error.push_frame(StackFrame::method("meth1"));
        error.push_frame(StackFrame::method("__init__"));

        let names: Vec<_> = error
            .stack
            .iter()
            .map(|f| f.method.clone())
            .collect();
        assert_eq!(names, vec!["meth1", "__init__"]);
    }

    #[test]
    fn test_result_alias_propagates() {
        fn inner() -> JsResult<u32> {
            Err(JsError::range_error("too deep"))
        }
        fn outer() -> JsResult<u32> {
            let v = inner()?;
            Ok(v + 1)
        }
        let err = outer().unwrap_err();
        assert_eq!(err.kind, ErrorKind::RangeError);
    }
}
