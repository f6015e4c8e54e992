//! Equality against fixed reference values.

use indexmap::IndexSet;

use crate::error::error;
use crate::path::Path;
use crate::value::Value;

use super::combinators::or;
use super::traits::Validator;

/// Deep structural equality used by [`is`].
///
/// Two values are equal when any of these holds:
/// 1. they are the same primitive (or the very same value in memory),
/// 2. their JSON texts are identical (two values without a JSON form count
///    as identical),
/// 3. both carry own keys and every key of either side maps to deeply equal
///    values on both sides, a missing key reading as `undefined`.
///
/// The JSON step makes `NaN` equal to `NaN` (and to `null`), and the key step
/// lets an array equal an object with the same index keys.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    same_value(a, b)
        || a.to_json_string() == b.to_json_string()
        || (a.is_keyed()
            && b.is_keyed()
            && key_union(a, b)
                .iter()
                .all(|key| deep_equal(a.get(key), b.get(key))))
}

fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Validator(x), Value::Validator(y)) => x.ptr_eq(y),
        _ => std::ptr::eq(a, b),
    }
}

/// Own keys of both values, first occurrence wins.
fn key_union(a: &Value, b: &Value) -> IndexSet<String> {
    a.own_keys().into_iter().chain(b.own_keys()).collect()
}

/// Passes iff the value is deeply equal to `reference` (see [`deep_equal`]).
///
/// The expected description is `is(<JSON of reference>)`.
///
/// # Example
///
/// ```rust
/// use fvalidate::{is, Value};
/// use serde_json::json;
///
/// let exact = is(json!({ "a": 1 }));
///
/// assert!(exact.validate(&Value::from(json!({ "a": 1 }))).is_none());
///
/// let err = exact.validate(&Value::from(json!({ "a": 2 }))).unwrap();
/// assert_eq!(err.expected, r#"is({"a":1})"#);
/// assert_eq!(err.received, Value::from(json!({ "a": 2 })));
/// ```
pub fn is(reference: impl Into<Value>) -> Validator {
    let reference = reference.into();
    let expected = format!("is({})", reference);

    Validator::named("is", move |value: &Value, path: &Path| {
        if deep_equal(value, &reference) {
            None
        } else {
            Some(error(path, expected.as_str(), value))
        }
    })
}

/// Passes iff the value is deeply equal to one of `references`.
///
/// Equivalent to `or` over `is` of every reference, so a failure reads
/// `or(is("apple"), is("beer"))`.
pub fn one_of<I>(references: I) -> Validator
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    or(references.into_iter().map(is)).with_name("one_of")
}
