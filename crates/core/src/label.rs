//! Normalized text attributes (names, manufacturers, sockets, ...).

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Free-form text with surrounding whitespace stripped.
///
/// Anything `Display` can become a label, so `2.5` and `"2.5 "` both normalize
/// to `"2.5"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(value: impl fmt::Display) -> Self {
        Self(value.to_string().trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Label {}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
