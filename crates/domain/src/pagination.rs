//! Paginated window over a listing result
//!
//! A [`Page`] is a read-only, size-bounded slice of a larger result set plus
//! the metadata needed to reconstruct the listing's shape. It never queries,
//! filters or sorts anything; the listing collaborator hands it an already
//! sliced page.
//!
//! # Examples
//!
//! ```
//! use domain::Page;
//!
//! let page = Page::new(vec!["a", "b", "c"], 7, 3, 2).unwrap();
//! assert_eq!(page.total_pages(), 3);
//!
//! let empty: Page<&str> = Page::empty(5, 0);
//! assert_eq!(empty.total_pages(), 0);
//! assert!(empty.is_empty());
//! ```

use crate::errors::ValidationFailure;

/// One page of a larger result set
///
/// `total_pages` is always derived from `total_count` and `page_size`, never
/// stored independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    total_count: u64,
    page_size: u32,
    page_index: u32,
}

impl<T> Page<T> {
    /// Wrap an already sliced page of items
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] when `page_size` is zero (the window
    /// would be degenerate and ceiling division undefined) or when the slice
    /// holds more items than the page size admits.
    pub fn new(
        items: Vec<T>,
        total_count: u64,
        page_size: u32,
        page_index: u32,
    ) -> Result<Self, ValidationFailure> {
        if page_size == 0 {
            return Err(ValidationFailure::of("page_size", "must not be zero"));
        }
        if items.len() as u64 > u64::from(page_size) {
            return Err(ValidationFailure::of(
                "items",
                "must not hold more items than the page size",
            ));
        }
        Ok(Self {
            items,
            total_count,
            page_size,
            page_index,
        })
    }

    /// The no-results window, still carrying page metadata
    #[must_use]
    pub const fn empty(page_size: u32, page_index: u32) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_size,
            page_index,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, yielding the owned items
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn page_index(&self) -> u32 {
        self.page_index
    }

    /// Derived page count: `ceil(total_count / page_size)`
    ///
    /// Zero results mean zero pages; constructors guarantee the divisor is
    /// non-zero whenever there are results.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.total_count == 0 {
            0
        } else {
            self.total_count.div_ceil(u64::from(self.page_size))
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Convert the item type while preserving all window metadata
    ///
    /// Used to turn a page of entities into a page of transfer objects
    /// without recounting anything.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_size: self.page_size,
            page_index: self.page_index,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn total_pages_covers_exactly_the_total_count(
            total_count in 0u64..10_000,
            page_size in 1u32..100
        ) {
            let page: Page<u8> = Page::new(Vec::new(), total_count, page_size, 0)
                .expect("empty slice always fits");
            let pages = page.total_pages();
            let size = u64::from(page_size);
            prop_assert!(pages * size >= total_count);
            prop_assert!(pages == 0 || (pages - 1) * size < total_count);
        }
    }
}
