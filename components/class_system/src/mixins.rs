//! Mixin merging: the middle tier of a member table.

use builtins::{JsValue, ObjectPrototype};
use core_types::{JsError, JsResult};

/// Copy every key of each mixin bag onto `target`, in list order.
///
/// Later bags override earlier ones. The factory runs this before copying
/// the definition's own members, so explicit members always win. Returns
/// the keys the mixins contributed.
pub fn merge_mixins(mixins: &[JsValue], target: &JsValue) -> JsResult<Vec<String>> {
    let mut contributed: Vec<String> = Vec::new();
    for (index, mixin) in mixins.iter().enumerate() {
        if !mixin.is_object() {
            return Err(JsError::type_error(format!(
                "mixin #{} is not a property bag (got {})",
                index,
                mixin.type_of()
            )));
        }
        ObjectPrototype::assign(target, mixin)?;
        for key in mixin.own_keys() {
            if !contributed.contains(&key) {
                contributed.push(key);
            }
        }
    }
    Ok(contributed)
}
