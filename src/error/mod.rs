//! Error type for validation failures.
//!
//! Validators report failure by returning a [`ValidationError`]; there is no
//! taxonomy of failure classes. The kind of mismatch is carried by the
//! `expected` description.

mod validation_error;

pub use validation_error::{error, ValidationError};
