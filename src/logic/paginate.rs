use std::num::NonZeroUsize;

/// One page of a filtered sequence plus navigation metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page (possibly empty).
    pub items: Vec<T>,
    /// `ceil(total / page_size)`; 0 for an empty sequence.
    pub page_count: usize,
    /// Requested page clamped from below to 1.
    pub effective_page: usize,
    /// Length of the sequence the page was cut from.
    pub total: usize,
}

impl<T> Page<T> {
    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.effective_page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.effective_page < self.page_count
    }
}

/// What: Cut one page out of an already filtered and deduplicated sequence.
///
/// Inputs:
/// - `subset`: Visible sequence (post-filter, post-dedup)
/// - `page_size`: Items per page
/// - `requested_page`: 1-based page; 0 is treated as 1
///
/// Output:
/// - `Page` with the slice `[(p-1)*size, p*size)`; pages past the end are empty.
///
/// Details:
/// - No upward clamping: the caller decides whether to allow navigation past `page_count`.
pub fn paginate<T: Clone>(subset: &[T], page_size: NonZeroUsize, requested_page: usize) -> Page<T> {
    let size = page_size.get();
    let total = subset.len();
    let page_count = total.div_ceil(size);
    let effective_page = requested_page.max(1);
    let start = (effective_page - 1).saturating_mul(size);
    let items = if start >= total {
        Vec::new()
    } else {
        let end = start.saturating_add(size).min(total);
        subset[start..end].to_vec()
    };
    Page {
        items,
        page_count,
        effective_page,
        total,
    }
}
