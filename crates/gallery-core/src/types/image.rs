//! The image record.

use serde::{Deserialize, Serialize};

use super::ImageId;

/// An image in the gallery.
///
/// Serialized in camelCase. Timestamps are ISO-8601 strings produced at
/// seed time and are never parsed or recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Stable, unique identity.
    pub id: ImageId,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    /// Whether the current viewer likes this image.
    #[serde(default)]
    pub liked: bool,

    /// Number of likes. No floor is enforced, so this may go negative.
    #[serde(default)]
    pub likes_count: i64,

    /// Picture URI.
    #[serde(default)]
    pub picture: Option<String>,

    #[serde(default)]
    pub price: Option<i64>,

    /// Title, matched by title filters.
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Image {
    /// Create an image with the given id and every other field defaulted.
    pub fn new(id: ImageId) -> Self {
        Self {
            id,
            author: None,
            created_at: None,
            liked: false,
            likes_count: 0,
            picture: None,
            price: None,
            title: None,
            updated_at: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the liked flag and count.
    pub fn with_likes(mut self, liked: bool, likes_count: i64) -> Self {
        self.liked = liked;
        self.likes_count = likes_count;
        self
    }

    /// Flip `liked` and move `likes_count` by one in the same direction.
    ///
    /// The count saturates at the `i64` bounds. Returns the new value of
    /// `liked`.
    pub fn toggle_like(&mut self) -> bool {
        self.liked = !self.liked;
        self.likes_count = if self.liked {
            self.likes_count.saturating_add(1)
        } else {
            self.likes_count.saturating_sub(1)
        };
        self.liked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn image(id: &str) -> Image {
        Image::new(ImageId::new(id).unwrap())
    }

    #[test]
    fn toggle_like_round_trips() {
        let mut img = image("1").with_likes(false, 10);

        assert!(img.toggle_like());
        assert_eq!(img.likes_count, 11);

        assert!(!img.toggle_like());
        assert_eq!(img.likes_count, 10);
    }

    #[test]
    fn toggle_like_goes_negative() {
        let mut img = image("1").with_likes(true, 0);
        img.toggle_like();
        assert!(!img.liked);
        assert_eq!(img.likes_count, -1);
    }

    #[test]
    fn toggle_like_saturates_at_bounds() {
        let mut img: Image =
            serde_json::from_value(json!({ "id": "1", "likesCount": i64::MAX })).unwrap();
        assert!(img.toggle_like());
        assert_eq!(img.likes_count, i64::MAX);

        let mut img = image("2").with_likes(true, i64::MIN);
        assert!(!img.toggle_like());
        assert_eq!(img.likes_count, i64::MIN);
    }

    #[test]
    fn serializes_camel_case() {
        let img = image("7").with_title("Dunes").with_likes(true, 3);
        let value = serde_json::to_value(&img).unwrap();
        assert_eq!(value["id"], "7");
        assert_eq!(value["likesCount"], 3);
        assert_eq!(value["liked"], true);
        assert_eq!(value["title"], "Dunes");
        assert!(value["createdAt"].is_null());
        assert!(value["updatedAt"].is_null());
    }

    #[test]
    fn deserialize_defaults_missing_fields() {
        let img: Image = serde_json::from_value(json!({ "id": "3" })).unwrap();
        assert_eq!(img, image("3"));
    }

    #[test]
    fn deserialize_rejects_invalid_id() {
        assert!(serde_json::from_value::<Image>(json!({ "id": "" })).is_err());
    }
}
