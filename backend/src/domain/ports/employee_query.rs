//! Driving port for employee reads.

use async_trait::async_trait;
use pagination::Page;
use serde::{Deserialize, Serialize};

use crate::domain::{Employee, Error};

/// Request to fetch one employee by its raw id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetEmployeeRequest {
    /// Unparsed id, e.g. a URL path segment.
    pub id: String,
}

/// Request to list employees within a resolved page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesRequest {
    /// Window of records to return, ordered by id.
    pub page: Page,
}

/// Page of employees plus the page that selected them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    /// The requested page, echoed back for the response envelope.
    pub page: Page,
    /// Records inside the page; shorter than the page size at the end.
    pub employees: Vec<Employee>,
}

/// Driving port for employee read operations.
///
/// # Examples
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use employees::domain::EmployeeService;
/// # use employees::domain::ports::{EmployeeQuery, GetEmployeeRequest};
/// # use employees::outbound::memory::InMemoryEmployeeRepository;
/// # async fn example() -> Result<(), employees::domain::Error> {
/// let query = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::default()));
/// let found = query.get(GetEmployeeRequest { id: "1".to_owned() }).await;
/// assert!(found.is_err());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// Fetch one employee.
    ///
    /// Fails with `invalid_param` for a blank or non-integer id and
    /// `entity_not_found` when no record matches.
    async fn get(&self, request: GetEmployeeRequest) -> Result<Employee, Error>;

    /// List employees in key order.
    async fn list(&self, request: ListEmployeesRequest) -> Result<ListEmployeesResponse, Error>;
}
