//! Interop with stillwater's [`Validation`] type.
//!
//! Validators natively answer with `Option<ValidationError>`. Callers that
//! compose outcomes with stillwater, or want a `Result` for `?`, can use
//! [`Validator::check`](crate::Validator::check) which returns a
//! [`ValidationResult`].

use stillwater::Validation;

use crate::error::ValidationError;

/// Outcome of checking one value: success carries nothing, failure carries
/// the first mismatch.
pub type ValidationResult = Validation<(), ValidationError>;

/// Converts a validator's native answer into a [`ValidationResult`].
pub fn into_validation(outcome: Option<ValidationError>) -> ValidationResult {
    match outcome {
        None => Validation::Success(()),
        Some(err) => Validation::Failure(err),
    }
}
