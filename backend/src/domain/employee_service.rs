//! Employee domain service.
//!
//! Implements both driving ports on top of an [`EmployeeRepository`]:
//! validate, check existence, then persist. Every operation is a single pass
//! with no retries.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    CreateEmployeeRequest, DeleteEmployeeRequest, EmployeeCommand, EmployeeQuery,
    EmployeeRepository, EmployeeRepositoryError, EmployeeResponse, GetEmployeeRequest,
    ListEmployeesRequest, ListEmployeesResponse, UpdateEmployeeRequest,
};
use crate::domain::{Employee, EmployeeId, Error};

const ID_PARAM: &str = "id";

fn map_repository_error(error: EmployeeRepositoryError) -> Error {
    Error::internal(format!("employee store error: {error}"))
}

fn parse_id(raw: &str) -> Result<EmployeeId, Error> {
    Ok(raw.parse::<EmployeeId>()?)
}

/// Employee service implementing the command and query driving ports.
#[derive(Clone)]
pub struct EmployeeService<R> {
    employee_repo: Arc<R>,
}

impl<R> EmployeeService<R> {
    /// Create a new service over the given repository.
    pub fn new(employee_repo: Arc<R>) -> Self {
        Self { employee_repo }
    }
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn find(&self, id: EmployeeId) -> Result<Option<Employee>, Error> {
        self.employee_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> EmployeeCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn create(&self, request: CreateEmployeeRequest) -> Result<EmployeeResponse, Error> {
        let Some(employee) = request.employee else {
            return Ok(EmployeeResponse::default());
        };
        let id = employee.validate()?;

        if self.find(id).await?.is_some() {
            debug!(employee_id = %id, "rejecting create for existing employee");
            return Err(Error::entity_already_exists(ID_PARAM, id.to_string()));
        }

        let created = self
            .employee_repo
            .create(&employee)
            .await
            .map_err(map_repository_error)?;

        Ok(EmployeeResponse {
            employee: Some(created),
        })
    }

    async fn update(&self, request: UpdateEmployeeRequest) -> Result<EmployeeResponse, Error> {
        let Some(employee) = request.employee else {
            return Ok(EmployeeResponse::default());
        };
        let id = employee.validate()?;

        if self.find(id).await?.is_none() {
            return Err(Error::entity_not_found(ID_PARAM, id.to_string()));
        }

        // Last writer wins; no version check.
        let updated = self
            .employee_repo
            .update(&employee)
            .await
            .map_err(|err| match err {
                EmployeeRepositoryError::Missing { .. } => {
                    debug!(employee_id = %id, "employee removed before update");
                    Error::entity_not_found(ID_PARAM, id.to_string())
                }
                other => map_repository_error(other),
            })?;

        Ok(EmployeeResponse {
            employee: Some(updated),
        })
    }

    async fn delete(&self, request: DeleteEmployeeRequest) -> Result<(), Error> {
        let id = parse_id(&request.id)?;
        self.employee_repo
            .delete(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> EmployeeQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn get(&self, request: GetEmployeeRequest) -> Result<Employee, Error> {
        let id = parse_id(&request.id)?;
        self.find(id)
            .await?
            .ok_or_else(|| Error::entity_not_found(ID_PARAM, request.id))
    }

    async fn list(&self, request: ListEmployeesRequest) -> Result<ListEmployeesResponse, Error> {
        let employees = self
            .employee_repo
            .list(&request.page)
            .await
            .map_err(map_repository_error)?;

        Ok(ListEmployeesResponse {
            page: request.page,
            employees,
        })
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
