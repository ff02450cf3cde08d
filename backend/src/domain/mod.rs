//! Domain primitives, services and ports.
//!
//! Purpose: define the employee record, its validation rules and the service
//! that orchestrates validation, existence checks and persistence. Nothing in
//! this module depends on HTTP or SQL; adapters reach it through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Employee / EmployeeId: the record and its key.
//! - EmployeeService: implementation of the employee driving ports.
//! - TraceId: request correlation identifier.

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::employee::{
    Employee, EmployeeId, EmployeeIdParseError, EmployeeValidationError, validate_employee,
};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
