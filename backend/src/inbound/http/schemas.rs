//! OpenAPI schema definitions for domain and pagination types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the wire shape of their corresponding types but
//! live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

use crate::inbound::http::employees::EmployeeBody;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required parameter was absent.
    #[schema(rename = "missing_param")]
    MissingParam,
    /// A parameter was present but malformed.
    #[schema(rename = "invalid_param")]
    InvalidParam,
    /// The addressed entity does not exist.
    #[schema(rename = "entity_not_found")]
    EntityNotFound,
    /// An entity with the same key already exists.
    #[schema(rename = "entity_already_exists")]
    EntityAlreadyExists,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "missing_param")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "parameter employee.name is required for this request")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// `{"params": [...]}` for parameter errors, `{"name", "value"}` for
    /// entity errors.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`pagination::Page`].
#[derive(ToSchema)]
#[schema(as = pagination::Page)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PageSchema {
    /// Records skipped before the page starts.
    #[schema(example = 0, minimum = 0)]
    offset: i64,
    /// Records per page.
    #[schema(example = 20)]
    size: i64,
}

/// OpenAPI schema for [`pagination::PageMeta`].
#[derive(ToSchema)]
#[schema(as = pagination::PageMeta)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PageMetaSchema {
    page: PageSchema,
}

/// OpenAPI schema for `Paginated<EmployeeBody>`, the list response envelope.
#[derive(ToSchema)]
#[schema(as = EmployeePage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeePageSchema {
    meta: PageMetaSchema,
    data: Vec<EmployeeBody>,
}
