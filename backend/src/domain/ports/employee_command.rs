//! Driving port for employee mutations.
//!
//! Requests carry raw caller input: an optional employee body or a string
//! id. Parsing and validation happen behind the port so every adapter gets
//! the same error taxonomy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Employee, Error};

/// Request to create an employee. `None` models an empty submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Record to insert, exactly as submitted.
    pub employee: Option<Employee>,
}

/// Request to overwrite an existing employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// Replacement record; its `id` selects the row to overwrite.
    pub employee: Option<Employee>,
}

/// Request to delete an employee by its raw id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmployeeRequest {
    /// Unparsed id, e.g. a URL path segment.
    pub id: String,
}

/// Outcome of a create or update. Empty when the request carried no body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// Record as stored.
    pub employee: Option<Employee>,
}

/// Driving port for employee write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Validate and insert a new employee.
    ///
    /// Fails with `missing_param`/`invalid_param` for incomplete records and
    /// `entity_already_exists` when the id is taken.
    async fn create(&self, request: CreateEmployeeRequest) -> Result<EmployeeResponse, Error>;

    /// Validate and overwrite an existing employee.
    ///
    /// Fails with `entity_not_found` when no record has the submitted id,
    /// including when the record is deleted between the lookup and the write.
    async fn update(&self, request: UpdateEmployeeRequest) -> Result<EmployeeResponse, Error>;

    /// Delete an employee. Unknown ids succeed.
    async fn delete(&self, request: DeleteEmployeeRequest) -> Result<(), Error>;
}
