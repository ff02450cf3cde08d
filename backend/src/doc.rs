//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the employee CRUD endpoints and the health checks
//! - **Schemas**: wire bodies plus wrappers ([`ErrorSchema`],
//!   [`ErrorCodeSchema`], [`PageSchema`]) that describe domain and pagination
//!   types without coupling them to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::employees::EmployeeBody;
use crate::inbound::http::schemas::{
    EmployeePageSchema, ErrorCodeSchema, ErrorSchema, PageMetaSchema, PageSchema,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employees API",
        description = "CRUD over employee records with offset pagination."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmployeeBody,
        EmployeePageSchema,
        PageMetaSchema,
        PageSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "employees", description = "Employee records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema and path registration.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn openapi_employee_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let employee = schemas.get("EmployeeBody").expect("EmployeeBody schema");

        for field in ["id", "name", "position", "salary"] {
            assert_object_schema_has_field(employee, field);
        }
    }

    #[test]
    fn openapi_registers_every_employee_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/v1/employees"));
        assert!(paths.contains_key("/api/v1/employees/{id}"));
        assert!(paths.contains_key("/health/ready"));
        assert!(paths.contains_key("/health/live"));
    }
}
