//! Wrapper for sensitive configuration values.

use serde::{Serialize, Serializer};
use std::fmt;

/// Placeholder written wherever a secret would otherwise appear.
pub(crate) const REDACTED: &str = "[REDACTED]";

/// An opaque sensitive string, such as a password or signing key.
///
/// `Debug` and serde output are redacted. There is no `Display` impl;
/// call [`Secret::expose`] where the actual value is needed.
#[derive(Clone)]
pub struct Secret(String);

impl Secret {
    /// Wraps a sensitive value.
    pub fn new(value: impl Into<String>) -> Self {
        Secret(value.into())
    }

    /// Returns the wrapped value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({REDACTED})")
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(REDACTED)
    }
}
