//! # fvalidate
//!
//! Functional validators for dynamically typed data. Small checks compose
//! into schemas, and checking a value yields either nothing (it passed) or
//! one path-annotated [`ValidationError`] describing the first mismatch.
//!
//! ## Overview
//!
//! Every validator obeys the same contract: given a [`Value`] and the
//! [`Path`] at which it sits, return `None` or a `ValidationError`. Because
//! the contract is uniform, a plain closure is as much a validator as the
//! built-in ones and plugs into every combinator.
//!
//! - Primitives: [`string`], [`number`], [`boolean`], [`object`], [`array`],
//!   [`date`], [`regexp`], [`is_null`], [`is_undefined`], [`empty`], [`regex`]
//! - Logic: [`not`], [`any`], [`and`], [`or`], [`optional`]
//! - Equality: [`is`], [`one_of`]
//! - Structure: [`object_of`], [`array_of`]
//! - Inference: [`like`]
//! - Embedded JSON: [`json_string`]
//!
//! Traversal order is fixed (schema keys in declaration order, array
//! elements by index, combinator operands in order), so the same validator
//! always reports the same error for the same value.
//!
//! ## Example
//!
//! ```rust
//! use fvalidate::{error, like, number, object_of, or, string, Path, Validator, Value};
//! use serde_json::json;
//!
//! let id = or([string(), number()]);
//! assert!(id.validate(&Value::from(7)).is_none());
//!
//! // Any function with the validator signature is a validator.
//! let even = Validator::named("even", |value: &Value, path: &Path| match value.as_f64() {
//!     Some(n) if n % 2.0 == 0.0 => None,
//!     _ => Some(error(path, "an even number", value)),
//! });
//!
//! let order = object_of([("id", id), ("quantity", even)]);
//! let err = order
//!     .validate(&Value::from(json!({ "id": "A1", "quantity": 3 })))
//!     .unwrap();
//! assert_eq!(err.message, "Path:'quantity', Expected: an even number, Received: '3'");
//!
//! // Schemas can also be inferred from an example document.
//! let shaped = like(json!({ "name": "example", "tags": ["x"] }));
//! assert!(shaped
//!     .validate(&Value::from(json!({ "name": "n", "tags": [] })))
//!     .is_none());
//! ```

pub mod error;
pub mod path;
pub mod schema;
pub mod validation;
pub mod value;

pub use error::{error, ValidationError};
pub use path::{Path, PathSegment};
pub use schema::{
    and, any, array, array_of, boolean, date, deep_equal, empty, is, is_null, is_undefined,
    json_string, like, not, number, object, object_of, one_of, optional, or, regex, regexp,
    string, Validate, Validator,
};
pub use validation::ValidationResult;
pub use value::{Tag, Value};
