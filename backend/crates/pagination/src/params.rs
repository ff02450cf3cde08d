//! Raw pagination query parameters.

use serde::{Deserialize, Serialize};

use crate::{Page, PaginationError};

/// Query key carrying the row offset.
pub const OFFSET_PARAM: &str = "page.offset";

/// Query key carrying the page size.
pub const SIZE_PARAM: &str = "page.size";

/// Unvalidated `page.offset` / `page.size` values as they arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Raw `page.offset` value.
    #[serde(rename = "page.offset", default)]
    pub offset: Option<String>,
    /// Raw `page.size` value.
    #[serde(rename = "page.size", default)]
    pub size: Option<String>,
}

impl PageParams {
    /// Extract pagination keys from a raw, URL-encoded query string.
    ///
    /// Unrelated keys are ignored. When a key repeats, the first occurrence
    /// wins.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageParams;
    ///
    /// let params = PageParams::from_query("page.size=5&page.size=9&q=x");
    /// assert_eq!(params.size.as_deref(), Some("5"));
    /// assert_eq!(params.offset, None);
    /// ```
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                OFFSET_PARAM => &mut params.offset,
                SIZE_PARAM => &mut params.size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// Resolve into a validated [`Page`].
    ///
    /// # Errors
    /// See [`Page::resolve`].
    pub fn resolve(&self) -> Result<Page, PaginationError> {
        Page::resolve(self.offset.as_deref(), self.size.as_deref())
    }
}
