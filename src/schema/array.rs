//! Array validation against a per-element validator.

use crate::path::Path;
use crate::value::Value;

use super::primitive::array;
use super::traits::Validator;

/// Validates every element of an array.
///
/// A non-array fails with the plain `array` error at the current path.
/// Otherwise elements are checked in index order against `element` at
/// `path.index`, and the first failing element's error is returned.
///
/// # Example
///
/// ```rust
/// use fvalidate::{array_of, string, Path, Value};
/// use serde_json::json;
///
/// let names = array_of(string());
///
/// assert!(names.validate(&Value::from(json!(["a", "b"]))).is_none());
///
/// let err = names.validate(&Value::from(json!(["33", 44]))).unwrap();
/// assert_eq!(err.path, Path::root().push_index(1));
/// assert_eq!(err.expected, "string");
/// ```
pub fn array_of(element: Validator) -> Validator {
    let array = array();

    Validator::named("array_of", move |value: &Value, path: &Path| match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(index, item)| element.validate_at(item, &path.push_index(index))),
        _ => array.validate_at(value, path),
    })
}
