//! Connection shapes returned by a listing.

use serde::{Deserialize, Serialize};

use super::Cursor;
use crate::types::Image;

/// A `(cursor, image)` pair in a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub cursor: Cursor,
    pub node: Image,
}

/// Boundaries of the current page and availability of further pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the first returned edge.
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last returned edge.
    pub end_cursor: Option<Cursor>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// One page of images.
///
/// `nodes` holds the same images as `edges`, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConnection {
    pub edges: Vec<Edge>,
    pub nodes: Vec<Image>,
    pub page_info: PageInfo,
}

impl ImageConnection {
    /// Build a connection from the returned slice.
    pub(crate) fn from_page(page: &[&Image], has_next_page: bool, has_previous_page: bool) -> Self {
        let edges: Vec<Edge> = page
            .iter()
            .map(|image| Edge {
                cursor: Cursor::encode(image),
                node: (*image).clone(),
            })
            .collect();

        let page_info = PageInfo {
            start_cursor: edges.first().map(|e| e.cursor.clone()),
            end_cursor: edges.last().map(|e| e.cursor.clone()),
            has_next_page,
            has_previous_page,
        };

        let nodes = edges.iter().map(|e| e.node.clone()).collect();

        Self {
            edges,
            nodes,
            page_info,
        }
    }

    /// Returns true when the page holds no images.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of images in the page.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Cursor to pass as `after` for the next page, if one exists.
    pub fn next_cursor(&self) -> Option<&Cursor> {
        if self.page_info.has_next_page {
            self.page_info.end_cursor.as_ref()
        } else {
            None
        }
    }
}
