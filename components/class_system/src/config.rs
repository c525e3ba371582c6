//! Reserved definition keys
//!
//! A definition bag is a plain property map; three of its keys carry
//! meaning to the class factory instead of becoming members. Their names
//! are configurable per root class.

use core_types::{JsError, JsResult};
use serde::{Deserialize, Serialize};

/// Names of the definition-bag keys the class factory interprets.
///
/// # Examples
///
/// ```
/// use class_system::ReservedKeys;
///
/// let keys = ReservedKeys::from_json(r#"{"initializer": "init"}"#).unwrap();
/// assert_eq!(keys.initializer, "init");
/// assert_eq!(keys.mixins, "__include__");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReservedKeys {
    /// Member run on construction (stays an ordinary, inherited member)
    pub initializer: String,
    /// List of mixin bags merged under explicit members
    pub mixins: String,
    /// Bag of class-level variables
    pub statics: String,
}

impl Default for ReservedKeys {
    fn default() -> Self {
        ReservedKeys {
            initializer: "__init__".to_string(),
            mixins: "__include__".to_string(),
            statics: "__classvars__".to_string(),
        }
    }
}

impl ReservedKeys {
    /// Load from a JSON document; omitted fields keep their defaults.
    pub fn from_json(text: &str) -> JsResult<Self> {
        let keys: ReservedKeys = serde_json::from_str(text)
            .map_err(|e| JsError::syntax_error(format!("invalid reserved key config: {}", e)))?;
        keys.validate()?;
        Ok(keys)
    }

    /// Keys must be non-empty and pairwise distinct.
    pub fn validate(&self) -> JsResult<()> {
        let all = [&self.initializer, &self.mixins, &self.statics];
        if all.iter().any(|k| k.is_empty()) {
            return Err(JsError::range_error("reserved keys must not be empty"));
        }
        if self.initializer == self.mixins
            || self.initializer == self.statics
            || self.mixins == self.statics
        {
            return Err(JsError::range_error(format!(
                "reserved keys must be distinct: {:?}",
                all
            )));
        }
        Ok(())
    }

    /// Whether `key` is consumed by the factory rather than copied as a member.
    pub fn is_directive(&self, key: &str) -> bool {
        key == self.mixins || key == self.statics
    }
}
