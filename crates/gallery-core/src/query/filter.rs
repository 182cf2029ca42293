//! Caller-supplied filter criteria.

use serde::{Deserialize, Serialize};

use crate::types::Image;

/// Criteria narrowing a listing.
///
/// The default value matches every image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFilter {
    /// Case-insensitive substring to look for in the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_contains: Option<String>,
}

impl ImageFilter {
    /// Filter on a title substring. An empty needle matches everything.
    pub fn title_contains(needle: impl Into<String>) -> Self {
        Self {
            title_contains: Some(needle.into()),
        }
    }

    /// Returns true when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.needle().is_none()
    }

    fn needle(&self) -> Option<&str> {
        self.title_contains.as_deref().filter(|s| !s.is_empty())
    }

    /// Lowercased needle, computed once per request.
    fn folded_needle(&self) -> Option<String> {
        self.needle().map(str::to_lowercase)
    }

    /// Check a single image against the criteria.
    ///
    /// Images without a title never match a title filter.
    pub fn matches(&self, image: &Image) -> bool {
        title_matches(self.folded_needle().as_deref(), image)
    }

    /// Produce the filtered sequence, preserving the input order.
    pub fn apply<'a, I>(&self, images: I) -> Vec<&'a Image>
    where
        I: IntoIterator<Item = &'a Image>,
    {
        let needle = self.folded_needle();
        images
            .into_iter()
            .filter(|image| title_matches(needle.as_deref(), image))
            .collect()
    }
}

fn title_matches(folded_needle: Option<&str>, image: &Image) -> bool {
    let Some(needle) = folded_needle else {
        return true;
    };

    image
        .title
        .as_deref()
        .is_some_and(|title| title.to_lowercase().contains(needle))
}
