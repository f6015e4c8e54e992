//! The validator contract.
//!
//! Every check in this crate, built-in or user supplied, is something that
//! can be asked "does this value at this path pass?" and answers with either
//! `None` or a single [`ValidationError`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::path::Path;
use crate::validation::{into_validation, ValidationResult};
use crate::value::Value;

/// A check over a single value.
///
/// Any `Fn(&Value, &Path) -> Option<ValidationError>` closure or function
/// implements this trait, so plain functions plug into every combinator.
/// Implementations must be pure: the same value and path always produce the
/// same result.
///
/// The `Send + Sync` bounds let validators be shared across threads.
pub trait Validate: Send + Sync {
    /// Checks `value`, reporting failures relative to `path`.
    fn validate_at(&self, value: &Value, path: &Path) -> Option<ValidationError>;

    /// Checks `value` starting from the root path.
    fn validate(&self, value: &Value) -> Option<ValidationError> {
        self.validate_at(value, &Path::root())
    }
}

impl<F> Validate for F
where
    F: Fn(&Value, &Path) -> Option<ValidationError> + Send + Sync,
{
    fn validate_at(&self, value: &Value, path: &Path) -> Option<ValidationError> {
        self(value, path)
    }
}

/// A shareable, named validator.
///
/// `Validator` is the handle every combinator accepts and returns. Cloning is
/// cheap (the check itself sits behind an `Arc`), and a validator can be
/// reused for any number of calls, including concurrent ones.
///
/// The name identifies the validator in descriptions built by [`not`](crate::not)
/// and [`json_string`](crate::json_string). Built-in validators are named
/// after their kind or constructor; validators made with [`Validator::new`]
/// are anonymous until [`Validator::with_name`] is used.
///
/// # Example
///
/// ```rust
/// use fvalidate::{or, number, string, Value};
///
/// let id = or([string(), number()]);
/// assert!(id.validate(&Value::from("abc")).is_none());
///
/// let err = id.validate(&Value::from(true)).unwrap();
/// assert_eq!(err.expected, "or(string, number)");
/// ```
#[derive(Clone)]
pub struct Validator {
    name: Cow<'static, str>,
    check: Arc<dyn Validate>,
}

impl Validator {
    /// Wraps a check function as an anonymous validator.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value, &Path) -> Option<ValidationError> + Send + Sync + 'static,
    {
        Self::from_validate(check)
    }

    /// Wraps a check function under `name`.
    pub fn named<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value, &Path) -> Option<ValidationError> + Send + Sync + 'static,
    {
        Self::new(check).with_name(name)
    }

    /// Wraps any [`Validate`] implementation as an anonymous validator.
    pub fn from_validate<V: Validate + 'static>(check: V) -> Self {
        Self {
            name: Cow::Borrowed(""),
            check: Arc::new(check),
        }
    }

    /// Returns the same check under a new name.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the identifying name (empty for anonymous validators).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks `value` from the root path.
    ///
    /// Returns `None` on success or the first mismatch found.
    pub fn validate(&self, value: &Value) -> Option<ValidationError> {
        let result = self.validate_at(value, &Path::root());

        #[cfg(feature = "tracing")]
        if let Some(ref err) = result {
            tracing::debug!(
                validator = %self.name,
                path = %err.path,
                expected = %err.expected,
                "validation failed"
            );
        }

        result
    }

    /// Checks `value`, reporting failures relative to `path`.
    pub fn validate_at(&self, value: &Value, path: &Path) -> Option<ValidationError> {
        self.check.validate_at(value, path)
    }

    /// Checks `value` and returns the outcome as a stillwater
    /// [`Validation`](stillwater::Validation).
    ///
    /// ```rust
    /// use fvalidate::{string, Value};
    ///
    /// let outcome = string().check(&Value::from(7));
    /// assert!(outcome.is_failure());
    /// assert!(outcome.into_result().is_err());
    /// ```
    pub fn check(&self, value: &Value) -> ValidationResult {
        into_validation(self.validate(value))
    }

    /// Returns true if both handles share the same check.
    pub fn ptr_eq(&self, other: &Validator) -> bool {
        Arc::ptr_eq(&self.check, &other.check)
    }
}

impl Validate for Validator {
    fn validate_at(&self, value: &Value, path: &Path) -> Option<ValidationError> {
        self.check.validate_at(value, path)
    }

    fn validate(&self, value: &Value) -> Option<ValidationError> {
        Validator::validate(self, value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").field("name", &self.name).finish()
    }
}
