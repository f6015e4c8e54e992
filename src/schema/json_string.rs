//! Validation of JSON documents embedded in strings.

use crate::error::error;
use crate::path::Path;
use crate::value::Value;

use super::traits::Validator;

/// Parses the value as JSON text and validates the parsed document.
///
/// Fails with expected `json string of (<inner name>)` when the value is not
/// a string or does not parse. Otherwise the parsed document is checked by
/// `inner` at the same path.
///
/// # Example
///
/// ```rust
/// use fvalidate::{json_string, number, object_of, string, Path, Value};
///
/// let payload = json_string(object_of([("str", string()), ("num", number())]));
///
/// assert!(payload
///     .validate(&Value::from(r#"{ "str": "apple", "num": 42 }"#))
///     .is_none());
///
/// let err = payload
///     .validate(&Value::from(r#"{ "str": "apple", "num": null }"#))
///     .unwrap();
/// assert_eq!(err.path, Path::root().push_key("num"));
/// assert_eq!(err.expected, "number");
/// ```
pub fn json_string(inner: Validator) -> Validator {
    let expected = format!("json string of ({})", inner.name());

    Validator::named("json_string", move |value: &Value, path: &Path| {
        let parsed = value
            .as_str()
            .and_then(|text| serde_json::from_str::<serde_json::Value>(text).ok());

        match parsed {
            Some(document) => inner.validate_at(&Value::from(document), path),
            None => Some(error(path, expected.as_str(), value)),
        }
    })
}
