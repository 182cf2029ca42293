//! Image identity type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Maximum length of an image identity, in bytes.
const MAX_LEN: usize = 256;

/// A validated image identity.
///
/// Identities are opaque, stable and unique within a collection. They are
/// never reassigned and are the only key usable as a cursor or as the
/// target of a mutation.
///
/// # Example
///
/// ```
/// use gallery_core::ImageId;
///
/// let id = ImageId::new("1").unwrap();
/// assert_eq!(id.as_str(), "1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageId(String);

impl ImageId {
    /// Create a new image id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, too long, or contains
    /// control characters.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::ImageId {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.len() > MAX_LEN {
            return Err(InvalidInputError::ImageId {
                value: s.to_string(),
                reason: format!("exceeds maximum length of {} bytes", MAX_LEN),
            }
            .into());
        }

        if let Some(c) = s.chars().find(|c| c.is_ascii_control()) {
            return Err(InvalidInputError::ImageId {
                value: s.to_string(),
                reason: format!("contains control character {:?}", c),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ImageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ImageId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ImageId> for String {
    fn from(id: ImageId) -> Self {
        id.0
    }
}

impl AsRef<str> for ImageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
