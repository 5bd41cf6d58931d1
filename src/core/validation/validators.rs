//! Reusable field validators
//!
//! Plugged into `#[derive(Validate)]` through `custom(function = ...)`.
//! For `Option` fields `validator` only calls these when a value is present,
//! so pair them with `required` to reject nulls.

use std::borrow::Cow;
use validator::ValidationError;

/// Validator: string must contain a non-whitespace character
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        Err(error)
    } else {
        Ok(())
    }
}
