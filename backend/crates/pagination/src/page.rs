//! Validated offset/size page descriptor.

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;

/// Offset applied when the caller omits `page.offset`.
pub const DEFAULT_OFFSET: i64 = 0;

/// Size applied when the caller omits `page.size` or passes `-1`.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Size sentinel meaning "no row limit".
///
/// Only reachable through [`Page::new`]; the query literal `-1` resolves to
/// [`DEFAULT_PAGE_SIZE`] instead.
pub const UNBOUNDED_PAGE_SIZE: i64 = -1;

/// Query literal that selects the default size.
const DEFAULT_SIZE_ALIAS: &str = "-1";

/// Bounded window over a list result.
///
/// ## Invariants
/// - `offset >= 0`.
/// - `size > 0`, or `size == UNBOUNDED_PAGE_SIZE`.
///
/// # Examples
/// ```
/// use pagination::{Page, PaginationError};
///
/// assert_eq!(Page::resolve(None, None), Ok(Page::default()));
/// assert_eq!(
///     Page::resolve(None, Some("0")),
///     Err(PaginationError::invalid_size("0")),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPage", into = "RawPage")]
pub struct Page {
    offset: i64,
    size: i64,
}

impl Page {
    /// Validate numeric bounds and build a page.
    ///
    /// Size is checked before offset so a request with both wrong reports
    /// `page.size`.
    ///
    /// # Errors
    /// [`PaginationError::InvalidSize`] when `size` is zero or below `-1`;
    /// [`PaginationError::InvalidOffset`] when `offset` is negative.
    pub fn new(offset: i64, size: i64) -> Result<Self, PaginationError> {
        if size < UNBOUNDED_PAGE_SIZE || size == 0 {
            return Err(PaginationError::invalid_size(size.to_string()));
        }
        if offset < DEFAULT_OFFSET {
            return Err(PaginationError::invalid_offset(offset.to_string()));
        }
        Ok(Self { offset, size })
    }

    /// Resolve raw `page.offset` / `page.size` query values.
    ///
    /// Absent or empty values fall back to the defaults. The size literal
    /// `"-1"` also selects the default size rather than an unbounded page.
    ///
    /// # Errors
    /// Returns a [`PaginationError`] naming the parameter that failed to parse
    /// or fell outside the allowed range.
    pub fn resolve(offset: Option<&str>, size: Option<&str>) -> Result<Self, PaginationError> {
        let parsed_offset = match non_empty(offset) {
            None => DEFAULT_OFFSET,
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| PaginationError::invalid_offset(raw))?,
        };

        let parsed_size = match non_empty(size) {
            None | Some(DEFAULT_SIZE_ALIAS) => DEFAULT_PAGE_SIZE,
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| PaginationError::invalid_size(raw))?,
        };

        Self::new(parsed_offset, parsed_size)
    }

    /// Number of rows to skip.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// Requested page size, `-1` when unbounded.
    #[must_use]
    pub const fn size(&self) -> i64 {
        self.size
    }

    /// Row limit to apply, or `None` for an unbounded page.
    #[must_use]
    pub const fn limit(&self) -> Option<i64> {
        if self.is_unbounded() {
            None
        } else {
            Some(self.size)
        }
    }

    /// Whether the page carries the unbounded sentinel.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.size == UNBOUNDED_PAGE_SIZE
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.is_empty())
}

#[derive(Serialize, Deserialize)]
struct RawPage {
    offset: i64,
    size: i64,
}

impl From<Page> for RawPage {
    fn from(value: Page) -> Self {
        Self {
            offset: value.offset,
            size: value.size,
        }
    }
}

impl TryFrom<RawPage> for Page {
    type Error = PaginationError;

    fn try_from(value: RawPage) -> Result<Self, Self::Error> {
        Self::new(value.offset, value.size)
    }
}
