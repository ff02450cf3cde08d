//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Employee, EmployeeId};

use super::schema::employee;

/// Row struct for reading from the employee table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employee)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub salary: i64,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::new(EmployeeId::new(row.id), row.name, row.position, row.salary)
    }
}

/// Insertable struct for creating employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employee)]
pub(crate) struct NewEmployeeRow<'a> {
    pub id: i64,
    pub name: &'a str,
    pub position: &'a str,
    pub salary: i64,
}

/// Changeset struct for overwriting employee records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employee)]
pub(crate) struct EmployeeUpdate<'a> {
    pub name: &'a str,
    pub position: &'a str,
    pub salary: i64,
}
