//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request binding failures are reported with the same parameter-oriented
//! errors the domain raises, so clients see one error vocabulary.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use pagination::{Page, PageParams, PaginationError};
use tracing::debug;

use crate::domain::{EmployeeId, Error};

/// Parameter reported when the request body cannot be bound.
pub(crate) const REQUEST_BODY_PARAM: &str = "request";

impl From<PaginationError> for Error {
    fn from(err: PaginationError) -> Self {
        Error::invalid_param(err.param())
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "request body rejected");
    Error::invalid_param(REQUEST_BODY_PARAM).into()
}

/// JSON extractor configuration reporting malformed bodies as
/// `invalid_param("request")`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Parse the `{id}` path segment.
pub(crate) fn parse_employee_id(raw: &str) -> Result<EmployeeId, Error> {
    raw.parse::<EmployeeId>().map_err(Error::from)
}

/// Resolve `page.offset` / `page.size` from a raw query string.
pub(crate) fn page_from_query(query: &str) -> Result<Page, Error> {
    PageParams::from_query(query).resolve().map_err(Error::from)
}
