//! Employee CRUD endpoints.
//!
//! ```text
//! POST   /api/v1/employees
//! GET    /api/v1/employees?page.offset=0&page.size=20
//! GET    /api/v1/employees/{id}
//! PUT    /api/v1/employees/{id}
//! DELETE /api/v1/employees/{id}
//! ```
//!
//! Handlers only translate between wire bodies and the employee ports; all
//! validation beyond request binding happens in the domain service.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use pagination::Paginated;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    CreateEmployeeRequest, DeleteEmployeeRequest, GetEmployeeRequest, ListEmployeesRequest,
    UpdateEmployeeRequest,
};
use crate::domain::{Employee, EmployeeId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EmployeePageSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{json_config, page_from_query, parse_employee_id};

/// Employee record as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeBody {
    /// Unique employee key.
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Display name; required and non-empty.
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Job title; empty when omitted.
    #[serde(default)]
    #[schema(example = "engineer")]
    pub position: String,
    /// Salary; 0 when omitted.
    #[serde(default)]
    #[schema(example = 120_000)]
    pub salary: i64,
}

impl From<EmployeeBody> for Employee {
    fn from(body: EmployeeBody) -> Self {
        Self {
            id: body.id.map(EmployeeId::new),
            name: body.name,
            position: body.position,
            salary: body.salary,
        }
    }
}

impl From<Employee> for EmployeeBody {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.map(EmployeeId::get),
            name: employee.name,
            position: employee.position,
            salary: employee.salary,
        }
    }
}

/// Bind a request body, treating JSON `null` as an employee with no fields.
fn bind_employee(payload: web::Json<Option<EmployeeBody>>) -> Employee {
    Employee::from(payload.into_inner().unwrap_or_default())
}

/// Register the employee routes and their body binding rules.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(create_employee)
        .service(list_employees)
        .service(get_employee)
        .service(update_employee)
        .service(delete_employee);
}

/// Create an employee.
///
/// A `null` body binds as an empty record and fails validation.
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body(content = EmployeeBody, description = "Employee to create; `null` is validated as an empty record"),
    responses(
        (status = 201, description = "Employee created", body = EmployeeBody),
        (status = 400, description = "Missing or invalid parameter", body = ErrorSchema),
        (status = 409, description = "Employee already exists", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<Option<EmployeeBody>>,
) -> ApiResult<HttpResponse> {
    let response = state
        .employees
        .create(CreateEmployeeRequest {
            employee: Some(bind_employee(payload)),
        })
        .await?;

    Ok(HttpResponse::Created().json(response.employee.map(EmployeeBody::from)))
}

/// Fetch one employee by id.
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee", body = EmployeeBody),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "No employee with this id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EmployeeBody>> {
    let employee = state
        .employees_query
        .get(GetEmployeeRequest {
            id: path.into_inner(),
        })
        .await?;
    Ok(web::Json(EmployeeBody::from(employee)))
}

/// List employees one page at a time, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    params(
        ("page.offset" = Option<i64>, Query, description = "Records to skip; defaults to 0"),
        ("page.size" = Option<i64>, Query, description = "Records per page; defaults to 20, -1 also selects the default")
    ),
    responses(
        (status = 200, description = "Page of employees", body = EmployeePageSchema),
        (status = 400, description = "Invalid page parameter", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<Paginated<EmployeeBody>>> {
    let page = page_from_query(req.query_string())?;
    let response = state
        .employees_query
        .list(ListEmployeesRequest { page })
        .await?;

    Ok(web::Json(
        Paginated::new(response.page, response.employees).map(EmployeeBody::from),
    ))
}

/// Replace an employee; the path id wins over any id in the body.
#[utoipa::path(
    put,
    path = "/api/v1/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    request_body(content = EmployeeBody, description = "Replacement record; `null` is validated as an empty record"),
    responses(
        (status = 200, description = "Employee updated", body = EmployeeBody),
        (status = 400, description = "Missing or invalid parameter", body = ErrorSchema),
        (status = 404, description = "No employee with this id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Option<EmployeeBody>>,
) -> ApiResult<web::Json<Option<EmployeeBody>>> {
    let id = parse_employee_id(&path.into_inner())?;
    let employee = Employee {
        id: Some(id),
        ..bind_employee(payload)
    };

    let response = state
        .employees
        .update(UpdateEmployeeRequest {
            employee: Some(employee),
        })
        .await?;
    Ok(web::Json(response.employee.map(EmployeeBody::from)))
}

/// Delete an employee. Deleting an unknown id still succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state
        .employees
        .delete(DeleteEmployeeRequest {
            id: path.into_inner(),
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
