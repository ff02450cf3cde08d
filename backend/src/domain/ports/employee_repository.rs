//! Port for employee record persistence.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Employee, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "employee repository query failed: {message}",
        /// The record to overwrite is not stored.
        Missing { id: i64 } => "employee {id} is not stored",
    }
}

/// Port for reading and writing employee records.
///
/// Implementations persist exactly what they are given; validation and
/// existence checks belong to the service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new record and return it as stored.
    async fn create(&self, employee: &Employee) -> Result<Employee, EmployeeRepositoryError>;

    /// Find a record by key.
    async fn find_by_id(&self, id: EmployeeId)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// List records ordered by key within `page`.
    ///
    /// An unbounded page applies the offset but no row limit.
    async fn list(&self, page: &Page) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Overwrite an existing record and return it as stored.
    ///
    /// Fails with [`EmployeeRepositoryError::Missing`] when no record has
    /// the employee's key.
    async fn update(&self, employee: &Employee) -> Result<Employee, EmployeeRepositoryError>;

    /// Remove a record. Removing an absent key succeeds.
    async fn delete(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError>;
}
