//! Forward cursor pagination over a filtered sequence.

use tracing::debug;

use super::{Cursor, ImageConnection};
use crate::types::Image;

/// Slice one page out of `sequence` and describe it.
///
/// `sequence` is the filtered sequence for this request. Paging resumes
/// immediately after the image `after` denotes. A cursor that does not
/// resolve within `sequence` restarts from the beginning instead of
/// failing the request. A `limit` of `None` or `Some(0)` returns the whole
/// remainder, in which case `has_next_page` is always false.
///
/// # Example
///
/// ```
/// use gallery_core::{Image, ImageId, paginate};
///
/// let images: Vec<Image> = ["1", "2"]
///     .into_iter()
///     .map(|id| Image::new(ImageId::new(id).unwrap()))
///     .collect();
/// let view: Vec<&Image> = images.iter().collect();
///
/// let page = paginate(&view, None, Some(1));
/// assert_eq!(page.nodes.len(), 1);
/// assert!(page.page_info.has_next_page);
/// ```
pub fn paginate(sequence: &[&Image], after: Option<&Cursor>, limit: Option<u32>) -> ImageConnection {
    let len = sequence.len();
    let start = resolve_start(sequence, after);
    let limit = limit.filter(|&n| n > 0).map(|n| n as usize);

    let end = match limit {
        Some(n) => start.saturating_add(n).min(len),
        None => len,
    };

    let has_next_page = limit.is_some_and(|n| start.saturating_add(n) < len);
    let has_previous_page = start > 0;

    let page = sequence.get(start..end).unwrap_or_default();

    ImageConnection::from_page(page, has_next_page, has_previous_page)
}

fn resolve_start(sequence: &[&Image], after: Option<&Cursor>) -> usize {
    let Some(cursor) = after else {
        return 0;
    };

    match cursor.decode(sequence) {
        Some(idx) => idx + 1,
        None => {
            debug!(%cursor, "Cursor not in filtered sequence, restarting from first page");
            0
        }
    }
}
