//! Logical combinators for composing validators.
//!
//! - `not`: passes iff the inner validator fails
//! - `any`: always passes
//! - `and`: all validators must pass, first failure wins
//! - `or`: at least one validator must pass, tried in order
//! - `optional`: `null`/`undefined` or the inner validator
//!
//! # Example
//!
//! ```rust
//! use fvalidate::{and, optional, or, regex, number, string, Value};
//!
//! let code = and([string(), regex(r"^[A-Z]{3}$").unwrap()]);
//! let id = or([string(), number()]);
//! let nickname = optional(string());
//!
//! assert!(code.validate(&Value::from("USD")).is_none());
//! assert!(id.validate(&Value::from(7)).is_none());
//! assert!(nickname.validate(&Value::Null).is_none());
//!
//! let err = nickname.validate(&Value::from(3)).unwrap();
//! assert_eq!(err.expected, "or(null or undefined, string)");
//! ```

use crate::error::error;
use crate::path::Path;
use crate::value::Value;

use super::primitive::empty;
use super::traits::Validator;

/// Passes iff `inner` fails.
///
/// The expected description is `not(<inner name>)`.
pub fn not(inner: Validator) -> Validator {
    let expected = format!("not({})", inner.name());

    Validator::named("not", move |value: &Value, path: &Path| {
        match inner.validate_at(value, path) {
            Some(_) => None,
            None => Some(error(path, expected.as_str(), value)),
        }
    })
}

/// Always passes.
pub fn any() -> Validator {
    Validator::named("any", |_: &Value, _: &Path| None)
}

/// Passes iff every validator passes.
///
/// Validators run in order and the first failure is returned unchanged.
/// An empty list passes everything.
pub fn and(validators: impl IntoIterator<Item = Validator>) -> Validator {
    let validators: Vec<Validator> = validators.into_iter().collect();

    Validator::named("and", move |value: &Value, path: &Path| {
        validators
            .iter()
            .find_map(|validator| validator.validate_at(value, path))
    })
}

/// Passes iff at least one validator passes.
///
/// Validators run in order, stopping at the first success. When all fail the
/// error describes every alternative as `or(<e1>, <e2>, ...)` and reports the
/// checked value itself as received.
pub fn or(validators: impl IntoIterator<Item = Validator>) -> Validator {
    let validators: Vec<Validator> = validators.into_iter().collect();

    Validator::named("or", move |value: &Value, path: &Path| {
        let mut expected = Vec::with_capacity(validators.len());
        for validator in &validators {
            match validator.validate_at(value, path) {
                None => return None,
                Some(err) => expected.push(err.expected),
            }
        }
        Some(error(path, format!("or({})", expected.join(", ")), value))
    })
}

/// Passes if the value is `null` or `undefined`, otherwise defers to `inner`.
///
/// Equivalent to `or([empty(), inner])`.
pub fn optional(inner: Validator) -> Validator {
    or([empty(), inner]).with_name("optional")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::primitive::{array, number, string};
    use serde_json::json;

    #[test]
    fn test_not() {
        assert!(not(array()).validate(&Value::from(0)).is_none());

        let err = not(array()).validate(&Value::from(json!([]))).unwrap();
        assert_eq!(err.expected, "not(array)");
    }

    #[test]
    fn test_not_of_anonymous() {
        let err = not(Validator::new(|_: &Value, _: &Path| None))
            .validate(&Value::Null)
            .unwrap();
        assert_eq!(err.expected, "not()");
    }

    #[test]
    fn test_any() {
        assert!(any().validate(&Value::Undefined).is_none());
        assert!(any().validate(&Value::from(json!({ "a": 1 }))).is_none());
    }

    #[test]
    fn test_and_empty_passes() {
        assert!(and(Vec::new()).validate(&Value::Null).is_none());
    }

    #[test]
    fn test_and_returns_first_failure() {
        let err = and([string(), number()])
            .validate(&Value::from(true))
            .unwrap();
        assert_eq!(err.expected, "string");
    }

    #[test]
    fn test_or_empty_fails() {
        let err = or(Vec::new()).validate(&Value::Null).unwrap();
        assert_eq!(err.expected, "or()");
    }

    #[test]
    fn test_or_short_circuits() {
        let tripwire = Validator::new(|_: &Value, _: &Path| panic!("should not run"));
        assert!(or([string(), tripwire]).validate(&Value::from("ok")).is_none());
    }

    #[test]
    fn test_or_reports_subject_at_path() {
        let path = Path::root().push_key("id");
        let err = or([string(), number()])
            .validate_at(&Value::from(json!([])), &path)
            .unwrap();

        assert_eq!(err.path, path);
        assert_eq!(err.expected, "or(string, number)");
        assert_eq!(err.received, Value::from(json!([])));
    }

    #[test]
    fn test_optional() {
        let v = optional(string());
        assert!(v.validate(&Value::Null).is_none());
        assert!(v.validate(&Value::Undefined).is_none());
        assert!(v.validate(&Value::from("sas")).is_none());
        assert_eq!(
            v.validate(&Value::from(3)).unwrap().expected,
            "or(null or undefined, string)"
        );
    }
}
