//! Request models
//!
//! Client input is type-checked on deserialization only. Invalid input
//! becomes a ValidationError, not a panic.

pub mod submission;
pub mod validation;

pub use submission::Submission;
pub use validation::ValidationError;
