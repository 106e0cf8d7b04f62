//! Client-side pagination: a pure slice over the already-fetched list,
//! recomputed on every render.

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page (possibly empty for an out-of-range page).
    pub items: &'a [T],
    /// 1-based page number as requested.
    pub number: usize,
    /// `ceil(total_items / page_size)`.
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice out page `number` (1-based) of `items`. Page `k` covers the index
/// range `[size * (k - 1), size * k)`; pages past the end are empty.
pub fn paginate<T>(items: &[T], number: usize, page_size: usize) -> Page<'_, T> {
    let number = number.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = page_size * (number - 1);
    let end = (start + page_size).min(total_items);
    let slice = if start >= total_items {
        &items[0..0]
    } else {
        &items[start..end]
    };

    Page {
        items: slice,
        number,
        total_pages,
        total_items,
    }
}
