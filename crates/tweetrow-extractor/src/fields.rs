//! Typed field access over raw JSON objects
//!
//! Three presence rules are used across the extractor:
//! - `require_*`: the key must exist with a non-null value
//! - `nullable_*`: the key must exist, its value may be null
//! - `opt_*`: absent and null both read as `None`
//!
//! In every case a value of the wrong JSON type is a [`ExtractorError::TypeMismatch`],
//! never a silent default.

use crate::error::{ExtractorError, Result};
use serde_json::{Map, Value};

/// A borrowed JSON object tagged with the structure it represents
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    object: &'a Map<String, Value>,
    context: &'static str,
}

impl<'a> Fields<'a> {
    /// Wrap a value that must be a JSON object
    pub fn new(value: &'a Value, context: &'static str) -> Result<Self> {
        value
            .as_object()
            .map(|object| Self { object, context })
            .ok_or_else(|| ExtractorError::mismatch(context, "an object", context))
    }

    /// Structure name used in error messages
    pub fn context(&self) -> &'static str {
        self.context
    }

    /// The underlying object
    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.object
    }

    /// Whether the key exists, null or not
    pub fn contains(&self, key: &str) -> bool {
        self.object.contains_key(key)
    }

    /// Non-null value of a key
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    /// Required integer
    pub fn require_i64(&self, key: &str) -> Result<i64> {
        self.opt_i64(key)?
            .ok_or_else(|| ExtractorError::missing(key, self.context))
    }

    /// Required string
    pub fn require_str(&self, key: &str) -> Result<&'a str> {
        self.opt_str(key)?
            .ok_or_else(|| ExtractorError::missing(key, self.context))
    }

    /// Integer that may be absent or null
    pub fn opt_i64(&self, key: &str) -> Result<Option<i64>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => integer(value)
                .map(Some)
                .ok_or_else(|| ExtractorError::mismatch(key, "an integer", self.context)),
        }
    }

    /// String that may be absent or null
    pub fn opt_str(&self, key: &str) -> Result<Option<&'a str>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(ExtractorError::mismatch(key, "a string", self.context)),
        }
    }

    /// Boolean that may be absent or null
    pub fn opt_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(ExtractorError::mismatch(key, "a boolean", self.context)),
        }
    }

    /// Integer whose key must exist but whose value may be null
    pub fn nullable_i64(&self, key: &str) -> Result<Option<i64>> {
        self.require_key(key)?;
        self.opt_i64(key)
    }

    /// String whose key must exist but whose value may be null
    pub fn nullable_str(&self, key: &str) -> Result<Option<&'a str>> {
        self.require_key(key)?;
        self.opt_str(key)
    }

    /// Required nested object
    pub fn object(&self, key: &str, context: &'static str) -> Result<Fields<'a>> {
        self.opt_object(key, context)?
            .ok_or_else(|| ExtractorError::missing(key, self.context))
    }

    /// Nested object that may be absent or null
    pub fn opt_object(&self, key: &str, context: &'static str) -> Result<Option<Fields<'a>>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Object(object)) => Ok(Some(Fields { object, context })),
            Some(_) => Err(ExtractorError::mismatch(key, "an object", self.context)),
        }
    }

    /// Array that may be absent or null
    pub fn opt_array(&self, key: &str) -> Result<Option<&'a [Value]>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items.as_slice())),
            Some(_) => Err(ExtractorError::mismatch(key, "an array", self.context)),
        }
    }

    fn require_key(&self, key: &str) -> Result<()> {
        if self.contains(key) {
            Ok(())
        } else {
            Err(ExtractorError::missing(key, self.context))
        }
    }
}

/// Read an integer, accepting the document store's extended-JSON wrappers
/// (`{"$numberLong": "..."}`, `{"$numberInt": "..."}`) as well as plain numbers
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::Object(object) if object.len() == 1 => object
            .get("$numberLong")
            .or_else(|| object.get("$numberInt"))
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_fields() {
        let value = json!({"id": 7, "name": "x", "gone": null});
        let fields = Fields::new(&value, "post").unwrap();

        assert_eq!(fields.require_i64("id").unwrap(), 7);
        assert_eq!(fields.require_str("name").unwrap(), "x");
        assert_eq!(
            fields.require_i64("missing"),
            Err(ExtractorError::missing("missing", "post"))
        );
        assert!(matches!(
            fields.require_str("gone"),
            Err(ExtractorError::MissingField { .. })
        ));
    }

    #[test]
    fn test_optional_fields_default_only_when_absent_or_null() {
        let value = json!({"quote_count": null, "reply_count": "3"});
        let fields = Fields::new(&value, "post").unwrap();

        assert_eq!(fields.opt_i64("quote_count").unwrap(), None);
        assert_eq!(fields.opt_i64("absent").unwrap(), None);
        assert_eq!(
            fields.opt_i64("reply_count"),
            Err(ExtractorError::mismatch("reply_count", "an integer", "post"))
        );
    }

    #[test]
    fn test_nullable_requires_key() {
        let value = json!({"in_reply_to_status_id": null});
        let fields = Fields::new(&value, "post").unwrap();

        assert_eq!(fields.nullable_i64("in_reply_to_status_id").unwrap(), None);
        assert!(matches!(
            fields.nullable_str("in_reply_to_status_id_str"),
            Err(ExtractorError::MissingField { .. })
        ));
    }

    #[test]
    fn test_extended_json_integers() {
        let value = json!({
            "id": {"$numberLong": "1050118621198921728"},
            "count": {"$numberInt": "12"},
            "bad": {"$numberLong": "nope"}
        });
        let fields = Fields::new(&value, "post").unwrap();

        assert_eq!(fields.require_i64("id").unwrap(), 1050118621198921728);
        assert_eq!(fields.require_i64("count").unwrap(), 12);
        assert!(fields.require_i64("bad").is_err());
    }

    #[test]
    fn test_nested_objects_and_arrays() {
        let value = json!({"user": {"id": 1}, "place": null, "tags": [1, 2], "flat": 3});
        let fields = Fields::new(&value, "post").unwrap();

        let user = fields.object("user", "user").unwrap();
        assert_eq!(user.context(), "user");
        assert_eq!(user.require_i64("id").unwrap(), 1);
        assert!(fields.opt_object("place", "place").unwrap().is_none());
        assert_eq!(fields.opt_array("tags").unwrap().map(<[Value]>::len), Some(2));
        assert!(fields.opt_array("flat").is_err());
        assert!(fields.opt_object("flat", "flat").is_err());
    }

    #[test]
    fn test_non_object_rejected() {
        let value = json!([1, 2]);
        assert!(matches!(
            Fields::new(&value, "post"),
            Err(ExtractorError::TypeMismatch { .. })
        ));
    }
}
