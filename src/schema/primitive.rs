//! Validators for the intrinsic kind of a value.
//!
//! Each one compares [`Value::tag`] against a single [`Tag`]. Objects and
//! arrays are disjoint kinds, and `NaN` and the infinities are numbers.

use ::regex::Regex;

use crate::error::error;
use crate::path::Path;
use crate::value::{Tag, Value};

use super::traits::Validator;

/// Passes iff the value's tag is exactly `tag`.
fn kind(tag: Tag) -> Validator {
    Validator::named(tag.name(), move |value: &Value, path: &Path| {
        if value.tag() == tag {
            None
        } else {
            Some(error(path, tag.name(), value))
        }
    })
}

/// Passes iff the value is a string.
///
/// ```rust
/// use fvalidate::{string, Value};
///
/// assert!(string().validate(&Value::from("")).is_none());
/// assert_eq!(string().validate(&Value::from(3)).unwrap().expected, "string");
/// ```
pub fn string() -> Validator {
    kind(Tag::String)
}

/// Passes iff the value is a number, including `NaN` and the infinities.
pub fn number() -> Validator {
    Validator::named("number", |value: &Value, path: &Path| {
        if value.tag().is_number() {
            None
        } else {
            Some(error(path, Tag::Number.name(), value))
        }
    })
}

/// Passes iff the value is a boolean.
pub fn boolean() -> Validator {
    kind(Tag::Boolean)
}

/// Passes iff the value is an object. Arrays are rejected.
pub fn object() -> Validator {
    kind(Tag::Object)
}

/// Passes iff the value is an array.
pub fn array() -> Validator {
    kind(Tag::Array)
}

/// Passes iff the value is a date.
pub fn date() -> Validator {
    kind(Tag::Date)
}

/// Passes iff the value is a regular expression.
pub fn regexp() -> Validator {
    kind(Tag::RegExp)
}

/// Passes iff the value is `null`. `undefined` is rejected.
pub fn is_null() -> Validator {
    kind(Tag::Null)
}

/// Passes iff the value is `undefined`. `null` is rejected.
pub fn is_undefined() -> Validator {
    kind(Tag::Undefined)
}

/// Passes iff the value is `null` or `undefined`.
pub fn empty() -> Validator {
    Validator::named("empty", |value: &Value, path: &Path| {
        if value.is_nullish() {
            None
        } else {
            Some(error(path, "null or undefined", value))
        }
    })
}

/// Passes iff the value is a string matched by `pattern`.
///
/// Non-string values are not converted to text before matching, so `4`
/// fails `regex("4")` even though JavaScript's `RegExp.test` would coerce
/// it to `"4"` and pass. Match against strings only. The expected
/// description embeds the pattern source, e.g. `match regex(/^\d+$/)`.
///
/// # Errors
///
/// Returns the compilation error if `pattern` is not a valid regex.
///
/// # Example
///
/// ```rust
/// use fvalidate::{regex, Value};
///
/// let digits = regex(r"^\d+$").unwrap();
///
/// assert!(digits.validate(&Value::from("12345")).is_none());
/// assert_eq!(
///     digits.validate(&Value::from("abc")).unwrap().expected,
///     r"match regex(/^\d+$/)"
/// );
/// ```
pub fn regex(pattern: &str) -> Result<Validator, ::regex::Error> {
    let re = Regex::new(pattern)?;
    let expected = format!("match regex(/{}/)", re.as_str());

    Ok(Validator::named("regex", move |value: &Value, path: &Path| {
        match value.as_str() {
            Some(s) if re.is_match(s) => None,
            _ => Some(error(path, expected.as_str(), value)),
        }
    }))
}
