//! Employee record and its validation rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Error;

/// Stable integer key for an employee record.
///
/// Parsed once at the service boundary; adapters below the service only ever
/// see this type.
///
/// # Examples
/// ```
/// use employees::domain::EmployeeId;
///
/// let id: EmployeeId = "42".parse().expect("integer id");
/// assert_eq!(id.get(), 42);
/// assert!("abc".parse::<EmployeeId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw key.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw key value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse failure for an externally supplied employee id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("employee id must be an integer, got {raw:?}")]
pub struct EmployeeIdParseError {
    raw: String,
}

impl From<EmployeeIdParseError> for Error {
    fn from(_: EmployeeIdParseError) -> Self {
        Error::invalid_param("id")
    }
}

impl FromStr for EmployeeId {
    type Err = EmployeeIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| EmployeeIdParseError { raw: s.to_owned() })
    }
}

/// Employee record as exchanged with callers and stores.
///
/// `id` and `name` are optional so an incomplete submission can be
/// represented and rejected by [`validate_employee`]. `position` and `salary`
/// carry no constraints.
///
/// # Examples
/// ```
/// use employees::domain::{Employee, EmployeeId};
///
/// let employee: Employee =
///     serde_json::from_str(r#"{"id":1,"name":"Ada"}"#).expect("valid json");
/// assert_eq!(employee.id, Some(EmployeeId::new(1)));
/// assert_eq!(employee.position, "");
/// assert_eq!(employee.salary, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store key; required for create and update.
    pub id: Option<EmployeeId>,
    /// Display name; required and non-empty for create and update.
    pub name: Option<String>,
    /// Job title, empty when not given.
    #[serde(default)]
    pub position: String,
    /// Salary in whole currency units, 0 when not given.
    #[serde(default)]
    pub salary: i64,
}

impl Employee {
    /// Build a fully populated record.
    #[must_use]
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: i64,
    ) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            position: position.into(),
            salary,
        }
    }

    /// Check the record is ready to persist and return its key.
    ///
    /// # Errors
    /// See [`EmployeeValidationError`].
    pub fn validate(&self) -> Result<EmployeeId, EmployeeValidationError> {
        let id = self.id.ok_or(EmployeeValidationError::MissingId)?;
        match self.name.as_deref() {
            None => Err(EmployeeValidationError::MissingName),
            Some("") => Err(EmployeeValidationError::EmptyName),
            Some(_) => Ok(id),
        }
    }
}

/// Validate an optional submission, rejecting an absent record outright.
///
/// # Errors
/// [`EmployeeValidationError::MissingEmployee`] when `employee` is `None`,
/// otherwise whatever [`Employee::validate`] reports.
pub fn validate_employee(employee: Option<&Employee>) -> Result<EmployeeId, EmployeeValidationError> {
    employee
        .ok_or(EmployeeValidationError::MissingEmployee)?
        .validate()
}

/// Reasons an employee submission is rejected before reaching a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeValidationError {
    /// No record was submitted at all.
    #[error("employee is required")]
    MissingEmployee,
    /// The record has no `id`.
    #[error("employee id is required")]
    MissingId,
    /// The record has no `name`.
    #[error("employee name is required")]
    MissingName,
    /// The record's `name` is the empty string.
    #[error("employee name must not be empty")]
    EmptyName,
}

impl EmployeeValidationError {
    /// Dotted name of the offending parameter.
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::MissingEmployee => "employee",
            Self::MissingId => "employee.id",
            Self::MissingName | Self::EmptyName => "employee.name",
        }
    }
}

impl From<EmployeeValidationError> for Error {
    fn from(value: EmployeeValidationError) -> Self {
        match value {
            EmployeeValidationError::EmptyName => Error::invalid_param(value.param()),
            EmployeeValidationError::MissingEmployee
            | EmployeeValidationError::MissingId
            | EmployeeValidationError::MissingName => Error::missing_param(value.param()),
        }
    }
}
