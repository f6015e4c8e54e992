//! The single failure record produced by validators.

use crate::path::Path;
use crate::value::Value;

/// Describes the first mismatch found while validating a value.
///
/// - **path**: where in the value the check failed
/// - **expected**: a readable description of what was expected, composed from
///   the descriptions of nested validators (e.g. `or(null or undefined, string)`)
/// - **received**: the offending value
/// - **message**: a summary derived from the three fields above
///
/// # Example
///
/// ```rust
/// use fvalidate::{error, Path, Value};
///
/// let err = error(&Path::root().push_index(1).push_key("b"), "string", &Value::from(42));
///
/// assert_eq!(err.message, "Path:'1.b', Expected: string, Received: '42'");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Location of the offending value.
    pub path: Path,
    /// Description of the expected shape.
    pub expected: String,
    /// The value that failed the check.
    pub received: Value,
    /// Human-readable summary.
    pub message: String,
}

impl ValidationError {
    /// Creates an error whose message is synthesized from the other fields.
    pub fn new(path: Path, expected: impl Into<String>, received: Value) -> Self {
        let expected = expected.into();
        let message = format!(
            "Path:'{}', Expected: {}, Received: '{}'",
            path, expected, received
        );
        Self {
            path,
            expected,
            received,
            message,
        }
    }

    /// Replaces the synthesized message and returns self for chaining.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Builds a [`ValidationError`] at `path`.
///
/// This is the constructor custom validators use to report a failure:
///
/// ```rust
/// use fvalidate::{error, Path, Validator, Value};
///
/// let even = Validator::named("even", |value: &Value, path: &Path| match value.as_f64() {
///     Some(n) if n % 2.0 == 0.0 => None,
///     _ => Some(error(path, "an even number", value)),
/// });
///
/// assert!(even.validate(&Value::from(4)).is_none());
/// assert_eq!(even.validate(&Value::from(3)).unwrap().expected, "an even number");
/// ```
pub fn error(path: &Path, expected: impl Into<String>, received: &Value) -> ValidationError {
    ValidationError::new(path.clone(), expected, received.clone())
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
