//! Validation of incoming resource data
//!
//! Field rules are declared on each resource with `#[derive(Validate)]`;
//! this module holds the shared validator functions and the request
//! extractor that turns malformed bodies into typed errors.

pub mod extractor;
pub mod validators;

pub use extractor::Payload;
pub use validators::not_blank;
