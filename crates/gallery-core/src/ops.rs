//! Request and response types for the two gallery operations.

use serde::{Deserialize, Serialize};

use crate::query::{Cursor, ImageFilter};
use crate::types::{Image, ImageId};

/// Arguments for listing images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListImagesInput {
    /// Page size. `None` or zero returns the whole remainder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Resume after the image this cursor denotes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Cursor>,

    /// Case-insensitive title substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_contains: Option<String>,
}

impl ListImagesInput {
    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the resume cursor.
    pub fn after(mut self, cursor: Cursor) -> Self {
        self.after = Some(cursor);
        self
    }

    /// Set the title filter.
    pub fn title_contains(mut self, needle: impl Into<String>) -> Self {
        self.title_contains = Some(needle.into());
        self
    }

    /// The filter criteria carried by this request.
    pub fn filter(&self) -> ImageFilter {
        ImageFilter {
            title_contains: self.title_contains.clone(),
        }
    }
}

/// Arguments for toggling the like state of an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeImageInput {
    pub image_id: ImageId,

    /// Correlation token echoed back unchanged.
    #[serde(default)]
    pub client_mutation_id: Option<String>,
}

impl LikeImageInput {
    pub fn new(image_id: ImageId) -> Self {
        Self {
            image_id,
            client_mutation_id: None,
        }
    }

    /// Attach a correlation token.
    pub fn with_client_mutation_id(mut self, id: impl Into<String>) -> Self {
        self.client_mutation_id = Some(id.into());
        self
    }
}

/// Result of a like toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeImagePayload {
    pub client_mutation_id: Option<String>,
    /// The image after the toggle.
    pub image: Image,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_input_from_json() {
        let input: ListImagesInput = serde_json::from_value(json!({
            "limit": 1,
            "after": "1",
            "titleContains": "sun"
        }))
        .unwrap();

        assert_eq!(
            input,
            ListImagesInput::default()
                .limit(1)
                .after(Cursor::from_raw("1"))
                .title_contains("sun")
        );
        assert_eq!(input.filter(), ImageFilter::title_contains("sun"));
    }

    #[test]
    fn list_input_rejects_negative_limit() {
        assert!(serde_json::from_value::<ListImagesInput>(json!({ "limit": -1 })).is_err());
    }

    #[test]
    fn empty_list_input_matches_all() {
        let input: ListImagesInput = serde_json::from_value(json!({})).unwrap();
        assert!(input.filter().is_empty());
        assert_eq!(input.limit, None);
    }

    #[test]
    fn like_input_from_json() {
        let input: LikeImageInput = serde_json::from_value(json!({
            "imageId": "1",
            "clientMutationId": "abc"
        }))
        .unwrap();
        assert_eq!(input.image_id.as_str(), "1");
        assert_eq!(input.client_mutation_id.as_deref(), Some("abc"));
    }

    #[test]
    fn payload_echoes_null_mutation_id() {
        let payload = LikeImagePayload {
            client_mutation_id: None,
            image: Image::new(ImageId::new("1").unwrap()),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["clientMutationId"].is_null());
        assert_eq!(value["image"]["id"], "1");
    }
}
