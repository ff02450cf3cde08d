//! List response envelope.

use serde::{Deserialize, Serialize};

use crate::Page;

/// Metadata block echoing the resolved page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page that produced the accompanying data.
    pub page: Page,
}

/// Page of items wrapped with its resolved [`Page`].
///
/// Serialises as `{"meta":{"page":{"offset":..,"size":..}},"data":[..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Echo of the applied page.
    pub meta: PageMeta,
    /// Items in the page, in store order.
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    /// Wrap `data` with the page that selected it.
    #[must_use]
    pub const fn new(page: Page, data: Vec<T>) -> Self {
        Self {
            meta: PageMeta { page },
            data,
        }
    }

    /// Convert every item while keeping the page metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            meta: self.meta,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
