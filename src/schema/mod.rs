//! Validators and the combinators that compose them.
//!
//! Every validator is a [`Validator`]: a named, shareable check that answers
//! `None` on success or the first [`ValidationError`](crate::ValidationError)
//! it finds. Combinators take validators and return new ones, so schemas are
//! just nested calls.
//!
//! # Example
//!
//! ```rust
//! use fvalidate::{array_of, number, object_of, optional, or, string, Path, Value};
//! use serde_json::json;
//!
//! let record = object_of([
//!     ("a", or([string(), number()])),
//!     ("b", object_of([("c", optional(string()))])),
//! ]);
//! let records = array_of(record);
//!
//! let good = json!({ "a": 5, "b": { "c": "I am also a string" } });
//! let bad = json!({ "a": 5, "b": { "c": 42 } });
//!
//! assert!(records.validate(&Value::from(json!([good, good]))).is_none());
//!
//! let err = records.validate(&Value::from(json!([good, bad]))).unwrap();
//! assert_eq!(err.path, Path::root().push_index(1).push_key("b").push_key("c"));
//! assert_eq!(
//!     err.message,
//!     "Path:'1.b.c', Expected: or(null or undefined, string), Received: '42'"
//! );
//! ```

mod array;
mod combinators;
mod equality;
mod json_string;
mod like;
mod object;
mod primitive;
mod traits;

pub use array::array_of;
pub use combinators::{and, any, not, optional, or};
pub use equality::{deep_equal, is, one_of};
pub use json_string::json_string;
pub use like::like;
pub use object::object_of;
pub use primitive::{
    array, boolean, date, empty, is_null, is_undefined, number, object, regex, regexp, string,
};
pub use traits::{Validate, Validator};
