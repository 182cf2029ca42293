//! Opaque pagination cursors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};
use crate::types::Image;

/// An opaque cursor denoting the position immediately after one image.
///
/// The token carries the image identity, never a sequence index: indices
/// into a filtered sequence are request-scoped and would not survive a
/// change of filter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Encode the cursor for an image.
    pub fn encode(image: &Image) -> Self {
        Self(image.id.as_str().to_string())
    }

    /// Wrap a caller-supplied token without validation.
    ///
    /// Tokens that do not resolve are handled when decoding.
    pub fn from_raw(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Parse a caller-supplied token, rejecting malformed ones.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::InvalidCursor`] for empty or
    /// whitespace-only tokens.
    pub fn parse(token: impl Into<String>) -> Result<Self, Error> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InvalidInputError::InvalidCursor {
                value: token,
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self(token))
    }

    /// Returns the token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Find the index of the image this cursor denotes in `sequence`.
    ///
    /// Returns `None` when no image in the sequence carries the identity,
    /// e.g. a cursor issued under a different filter.
    pub fn decode(&self, sequence: &[&Image]) -> Option<usize> {
        sequence
            .iter()
            .position(|image| image.id.as_str() == self.0)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageId;

    fn images(ids: &[&str]) -> Vec<Image> {
        ids.iter()
            .map(|id| Image::new(ImageId::new(*id).unwrap()))
            .collect()
    }

    #[test]
    fn encode_uses_identity() {
        let all = images(&["a", "b"]);
        assert_eq!(Cursor::encode(&all[1]).as_str(), "b");
    }

    #[test]
    fn decode_finds_position() {
        let all = images(&["a", "b", "c"]);
        let view: Vec<&Image> = all.iter().collect();

        for (idx, image) in all.iter().enumerate() {
            assert_eq!(Cursor::encode(image).decode(&view), Some(idx));
        }
    }

    #[test]
    fn decode_unknown_is_none() {
        let all = images(&["a", "b"]);
        let view: Vec<&Image> = all.iter().collect();
        assert_eq!(Cursor::from_raw("zzz").decode(&view), None);
        assert_eq!(Cursor::from_raw("").decode(&view), None);
    }

    #[test]
    fn decode_outside_filtered_view_is_none() {
        let all = images(&["a", "b", "c"]);
        let view: Vec<&Image> = vec![&all[0], &all[2]];
        assert_eq!(Cursor::encode(&all[1]).decode(&view), None);
        assert_eq!(Cursor::encode(&all[2]).decode(&view), Some(1));
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(Cursor::parse("").is_err());
        assert!(Cursor::parse("  ").is_err());
        assert_eq!(Cursor::parse("1").unwrap().as_str(), "1");
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&Cursor::from_raw("2")).unwrap();
        assert_eq!(json, "\"2\"");
    }
}
