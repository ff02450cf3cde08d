//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_command;
mod employee_query;
mod employee_repository;

pub use employee_command::{
    CreateEmployeeRequest, DeleteEmployeeRequest, EmployeeCommand, EmployeeResponse,
    UpdateEmployeeRequest,
};
#[cfg(test)]
pub use employee_command::MockEmployeeCommand;
pub use employee_query::{
    EmployeeQuery, GetEmployeeRequest, ListEmployeesRequest, ListEmployeesResponse,
};
#[cfg(test)]
pub use employee_query::MockEmployeeQuery;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
