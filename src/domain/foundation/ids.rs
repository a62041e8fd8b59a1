//! Strongly-typed identifier value objects.
//!
//! Survey content arrives from an external authoring store, so identifiers are
//! opaque strings rather than UUIDs. Locally created templates receive a fresh
//! UUID v4 string.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, rejecting blank values.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(value))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a survey question.
    QuestionId,
    "question_id"
);

string_id!(
    /// Identifier of a single submitted response.
    ResponseId,
    "response_id"
);

string_id!(
    /// Key of a trait axis, as used in question weight maps.
    AxisKey,
    "axis_key"
);

string_id!(
    /// Identifier of a diagnosis result template.
    TemplateId,
    "template_id"
);

impl TemplateId {
    /// Creates a new random TemplateId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}
