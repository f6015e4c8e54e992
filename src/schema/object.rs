//! Object validation against a per-field schema.

use crate::path::Path;
use crate::value::Value;

use super::combinators::and;
use super::primitive::object;
use super::traits::Validator;

/// Validates objects field by field.
///
/// Passes iff the value is an object and, for every `(key, validator)` of
/// `schema`, the field value passes `validator` at `path.key`. Fields run in
/// the order given and the first failure wins. A missing field is checked as
/// `undefined`; fields not named in the schema are ignored.
///
/// # Example
///
/// ```rust
/// use fvalidate::{number, object_of, optional, or, string, Path, Value};
/// use serde_json::json;
///
/// let schema = object_of([
///     ("a", or([string(), number()])),
///     ("b", object_of([("c", optional(string()))])),
/// ]);
///
/// assert!(schema.validate(&Value::from(json!({ "a": 5, "b": {} }))).is_none());
///
/// let err = schema
///     .validate(&Value::from(json!({ "a": 5, "b": { "c": 42 } })))
///     .unwrap();
/// assert_eq!(err.path, Path::root().push_key("b").push_key("c"));
/// assert_eq!(err.expected, "or(null or undefined, string)");
/// ```
pub fn object_of<K>(schema: impl IntoIterator<Item = (K, Validator)>) -> Validator
where
    K: Into<String>,
{
    let fields = schema
        .into_iter()
        .map(|(key, validator)| field(key.into(), validator));

    and(std::iter::once(object()).chain(fields)).with_name("object_of")
}

/// Checks one field of an object, extending the path with its key.
fn field(key: String, validator: Validator) -> Validator {
    Validator::named(key.clone(), move |value: &Value, path: &Path| {
        validator.validate_at(value.get(&key), &path.push_key(key.as_str()))
    })
}
