//! Runtime values checked by validators.
//!
//! [`Value`] is a closed model of every kind of data a validator can be asked
//! about: the JSON kinds plus `undefined`, dates, regular expressions and
//! validators themselves (which [`like`](crate::like) treats as ready-made
//! checks). [`Tag`] is the canonical classification used by the primitive
//! validators.

use std::fmt::{self, Display};

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use regex::Regex;

use crate::schema::Validator;

/// Shared `undefined` returned when reading a key that is not present.
static UNDEFINED: Value = Value::Undefined;

/// A dynamically typed value.
///
/// # Example
///
/// ```rust
/// use fvalidate::{Tag, Value};
/// use serde_json::json;
///
/// let value = Value::from(json!({ "a": [1, "two"] }));
///
/// assert_eq!(value.tag(), Tag::Object);
/// assert_eq!(value.get("a").get("1"), &Value::from("two"));
/// assert_eq!(value.get("missing"), &Value::Undefined);
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value (a missing key reads as `Undefined`).
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double precision number, including `NaN` and the infinities.
    Number(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered list of values.
    Array(Vec<Value>),
    /// Keyed values in insertion order.
    Object(IndexMap<String, Value>),
    /// A point in time.
    Date(DateTime<Utc>),
    /// A compiled regular expression.
    RegExp(Regex),
    /// A validator embedded as data.
    Validator(Validator),
}

/// The intrinsic kind of a [`Value`].
///
/// `NaN` gets its own tag so equality-based comparisons never trip over its
/// self-inequality; [`Tag::is_number`] still counts it as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Date,
    RegExp,
    Null,
    Undefined,
    NaN,
    Function,
}

impl Tag {
    /// Returns the lowercase name used in error descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Tag::String => "string",
            Tag::Number => "number",
            Tag::Boolean => "boolean",
            Tag::Object => "object",
            Tag::Array => "array",
            Tag::Date => "date",
            Tag::RegExp => "regexp",
            Tag::Null => "null",
            Tag::Undefined => "undefined",
            Tag::NaN => "NaN",
            Tag::Function => "function",
        }
    }

    /// Returns true for `Number` and `NaN`.
    pub fn is_number(self) -> bool {
        matches!(self, Tag::Number | Tag::NaN)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Builds an object value from key/value pairs, keeping their order.
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Classifies this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Undefined => Tag::Undefined,
            Value::Null => Tag::Null,
            Value::Bool(_) => Tag::Boolean,
            Value::Number(n) if n.is_nan() => Tag::NaN,
            Value::Number(_) => Tag::Number,
            Value::String(_) => Tag::String,
            Value::Array(_) => Tag::Array,
            Value::Object(_) => Tag::Object,
            Value::Date(_) => Tag::Date,
            Value::RegExp(_) => Tag::RegExp,
            Value::Validator(_) => Tag::Function,
        }
    }

    /// Returns true for `Null` and `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Returns true for values that carry own keys: objects, arrays, dates
    /// and regular expressions.
    pub(crate) fn is_keyed(&self) -> bool {
        matches!(
            self,
            Value::Object(_) | Value::Array(_) | Value::Date(_) | Value::RegExp(_)
        )
    }

    /// Lists own keys: field names for objects, index text for arrays.
    pub(crate) fn own_keys(&self) -> Vec<String> {
        match self {
            Value::Object(map) => map.keys().cloned().collect(),
            Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    /// Reads an own key. Array elements are addressed by their index text.
    /// Anything missing reads as `Undefined`.
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Value::Object(map) => map.get(key).unwrap_or(&UNDEFINED),
            Value::Array(items) => key
                .parse::<usize>()
                .ok()
                .filter(|idx| idx.to_string() == key)
                .and_then(|idx| items.get(idx))
                .unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }

    /// Returns the string slice if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the fields if this is an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Serializes to compact JSON text.
    ///
    /// Returns `None` for values with no JSON form (`Undefined` and
    /// validators). Inside objects such fields are dropped; inside arrays
    /// they become `null`. Non-finite numbers become `null`, dates become
    /// ISO-8601 strings and regular expressions become `{}`.
    ///
    /// Numbers are written the way JavaScript prints them: whole numbers
    /// below `1e21` as plain digits, larger or tiny magnitudes in exponent
    /// form (`1e+21`, `1e-7`).
    pub fn to_json_string(&self) -> Option<String> {
        let mut out = String::new();
        self.write_json(&mut out).then_some(out)
    }

    /// Appends the JSON text to `out`. Writes nothing and returns `false`
    /// when there is no JSON form.
    fn write_json(&self, out: &mut String) -> bool {
        match self {
            Value::Undefined | Value::Validator(_) => return false,
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(&number_text(*n)),
            Value::String(s) => write_json_str(s, out),
            Value::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    if !item.write_json(out) {
                        out.push_str("null");
                    }
                }
                out.push(']');
            }
            Value::Object(map) => {
                out.push('{');
                let mut first = true;
                for (key, field) in map {
                    if matches!(field, Value::Undefined | Value::Validator(_)) {
                        continue;
                    }
                    if !first {
                        out.push(',');
                    }
                    first = false;
                    write_json_str(key, out);
                    out.push(':');
                    field.write_json(out);
                }
                out.push('}');
            }
            Value::Date(date) => {
                write_json_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true), out)
            }
            Value::RegExp(_) => out.push_str("{}"),
        }
        true
    }
}

fn write_json_str(s: &str, out: &mut String) {
    out.push_str(&serde_json::Value::String(s.to_owned()).to_string());
}

/// Number text as JavaScript prints it; non-finite numbers become `null`.
fn number_text(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n == 0.0 {
        // also folds -0 into 0
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e2`
    let sci = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let count = digits.len() as i32;
    // position of the decimal point relative to the first digit
    let point = exponent + 1;

    let body = if count <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - count) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, frac) = digits.split_at(point as usize);
        format!("{}.{}", whole, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if exponent >= 0 { '+' } else { '-' };
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    };

    if n < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Renders the JSON text, or `undefined` when there is none.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json_string() {
            Some(text) => f.write_str(&text),
            None => f.write_str("undefined"),
        }
    }
}

/// Structural equality for assertions: `NaN` equals `NaN`, regular
/// expressions compare by source and validators by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::RegExp(a), Value::RegExp(b)) => a.as_str() == b.as_str(),
            (Value::Validator(a), Value::Validator(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self {
        Value::RegExp(re)
    }
}

impl From<Validator> for Value {
    fn from(validator: Validator) -> Self {
        Value::Validator(validator)
    }
}
