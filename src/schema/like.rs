//! Validators inferred from an example value.

use crate::value::Value;

use super::array::array_of;
use super::equality::is;
use super::object::object_of;
use super::primitive::{array, boolean, date, empty, number, regexp, string};
use super::traits::Validator;

/// Builds a validator that accepts values shaped like `reference`.
///
/// The reference is walked recursively:
/// - an embedded validator is used as-is
/// - numbers, strings, booleans, dates and regexps check the kind only
/// - `null` and `undefined` become [`empty`]
/// - objects become [`object_of`] over their inferred fields
/// - arrays become [`array_of`] of their first element's shape, or the bare
///   [`array`] check when the array is empty or starts with `null`/`undefined`
/// - anything else (`NaN`) must be equal via [`is`]
///
/// # Example
///
/// ```rust
/// use fvalidate::{like, Path, Value};
/// use serde_json::json;
///
/// let points = like(json!([{ "x": 1 }]));
///
/// assert!(points.validate(&Value::from(json!([{ "x": 2 }, { "x": 3 }]))).is_none());
///
/// let err = points.validate(&Value::from(json!([{ "x": "s" }]))).unwrap();
/// assert_eq!(err.path, Path::root().push_index(0).push_key("x"));
/// assert_eq!(err.expected, "number");
/// ```
pub fn like(reference: impl Into<Value>) -> Validator {
    infer(&reference.into()).with_name("like")
}

fn infer(reference: &Value) -> Validator {
    match reference {
        Value::Validator(validator) => validator.clone(),
        Value::Number(n) if n.is_nan() => is(reference.clone()),
        Value::Number(_) => number(),
        Value::String(_) => string(),
        Value::Bool(_) => boolean(),
        Value::Date(_) => date(),
        Value::RegExp(_) => regexp(),
        Value::Null | Value::Undefined => empty(),
        Value::Object(fields) => {
            object_of(fields.iter().map(|(key, field)| (key.clone(), infer(field))))
        }
        Value::Array(items) => match items.first() {
            Some(first) if !first.is_nullish() => array_of(infer(first)),
            _ => array(),
        },
    }
}
