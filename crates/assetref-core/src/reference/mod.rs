//! Raw media references as the backend hands them over.
//!
//! A record may store an image locator as a bare string, as an object with
//! `url`/`path` fields, or not at all. [`RawReference`] captures those shapes
//! once, at the data boundary, so the rest of the crate only deals with
//! sanitized strings.

mod sanitize;

pub use sanitize::sanitize;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// However the backend happened to store an image locator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RawReference {
    #[default]
    Absent,
    Str(String),
    Object {
        url: Option<String>,
        path: Option<String>,
    },
}

impl RawReference {
    pub fn is_absent(&self) -> bool {
        matches!(self, RawReference::Absent)
    }
}

impl From<&Value> for RawReference {
    /// Strings and objects map to their variants; every other JSON type is `Absent`.
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => RawReference::Str(s.clone()),
            Value::Object(map) => {
                let field = |name: &str| map.get(name).and_then(Value::as_str).map(str::to_owned);
                RawReference::Object {
                    url: field("url"),
                    path: field("path"),
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => {
                RawReference::Absent
            }
        }
    }
}

impl From<Value> for RawReference {
    fn from(value: Value) -> Self {
        RawReference::from(&value)
    }
}

impl From<&str> for RawReference {
    fn from(s: &str) -> Self {
        RawReference::Str(s.to_string())
    }
}

impl From<String> for RawReference {
    fn from(s: String) -> Self {
        RawReference::Str(s)
    }
}

impl<T: Into<RawReference>> From<Option<T>> for RawReference {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for RawReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(RawReference::from(&value))
    }
}
