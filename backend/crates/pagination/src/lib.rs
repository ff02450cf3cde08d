//! Offset/size pagination primitives shared by backend list endpoints.
//!
//! The crate resolves the `page.offset` and `page.size` query parameters into
//! a validated [`Page`] and wraps list results in the
//! `{ "meta": { "page": { ... } }, "data": [ ... ] }` envelope.
//!
//! ```
//! use pagination::{Page, Paginated};
//!
//! let page = Page::resolve(Some("5"), Some("10")).expect("valid page");
//! assert_eq!((page.offset(), page.size()), (5, 10));
//!
//! let envelope = Paginated::new(page, vec!["a", "b"]);
//! assert_eq!(envelope.data.len(), 2);
//! ```

mod envelope;
mod error;
mod page;
mod params;

pub use envelope::{PageMeta, Paginated};
pub use error::PaginationError;
pub use page::{DEFAULT_OFFSET, DEFAULT_PAGE_SIZE, Page, UNBOUNDED_PAGE_SIZE};
pub use params::{OFFSET_PARAM, PageParams, SIZE_PARAM};
