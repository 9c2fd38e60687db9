//! Contact form submission body

use serde::Deserialize;

/// Body of `POST /submit`.
///
/// All three fields are required strings. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}
