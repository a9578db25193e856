//! Fixed-size paging with wraparound navigation.

/// One page of a borrowed list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Records on this page.
    pub items: &'a [T],
    /// Normalized page index.
    pub index: usize,
    /// Page count, never zero.
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    /// Whether page controls should be offered.
    #[must_use]
    pub const fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }
}

/// Number of pages needed for `len` records; at least one.
///
/// A zero `page_size` is treated as one record per page.
#[must_use]
pub const fn total_pages(len: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    let pages = len.div_ceil(size);
    if pages == 0 { 1 } else { pages }
}

/// Slice out page `index` after wrapping it into range.
#[must_use]
pub fn paginate<T>(items: &[T], page_size: usize, index: usize) -> Page<'_, T> {
    let size = page_size.max(1);
    let total_pages = total_pages(items.len(), size);
    let index = index % total_pages;
    let start = (index * size).min(items.len());
    let end = (start + size).min(items.len());
    Page {
        items: &items[start..end],
        index,
        total_pages,
    }
}

/// Following page index, wrapping to the first.
#[must_use]
pub const fn next_page(index: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        return 0;
    }
    (index + 1) % total_pages
}

/// Preceding page index, wrapping to the last.
#[must_use]
pub const fn prev_page(index: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        return 0;
    }
    (index % total_pages + total_pages - 1) % total_pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_bounded_for_any_index() {
        let items: Vec<u32> = (1..=8).collect();
        for index in 0..20 {
            let page = paginate(&items, 3, index);
            assert!(page.items.len() <= 3);
            assert!(page.index < page.total_pages);
        }
        assert_eq!(paginate(&items, 3, 2).items, &[7, 8]);
        assert_eq!(paginate(&items, 3, 4).items, &[4, 5, 6]);
    }

    #[test]
    fn next_page_cycles_back_to_start() {
        let total = total_pages(8, 3);
        assert_eq!(total, 3);
        let mut index = 0;
        for _ in 0..total {
            index = next_page(index, total);
        }
        assert_eq!(index, 0);
        assert_eq!(prev_page(0, total), 2);
        assert_eq!(prev_page(2, total), 1);
    }

    #[test]
    fn empty_subset_is_a_single_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 3, 5);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.index, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_multiple_pages());
    }

    #[test]
    fn zero_page_size_counts_as_one() {
        let items = [10, 20, 30];
        let page = paginate(&items, 0, 1);
        assert_eq!(page.items, &[20]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(total_pages(0, 0), 1);
    }
}
