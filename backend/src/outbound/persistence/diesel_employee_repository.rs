//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::Page;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{EmployeeRow, EmployeeUpdate, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employee;

/// Diesel-backed implementation of the employee repository port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    map_basic_pool_error(error, EmployeeRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    map_basic_diesel_error(
        error,
        EmployeeRepositoryError::query,
        EmployeeRepositoryError::connection,
    )
}

/// Extract the non-null columns; the table has no nullable fields.
fn required_columns(employee: &Employee) -> Result<(i64, &str), EmployeeRepositoryError> {
    let id = employee
        .id
        .ok_or_else(|| EmployeeRepositoryError::query("employee id is required"))?;
    let name = employee
        .name
        .as_deref()
        .ok_or_else(|| EmployeeRepositoryError::query("employee name is required"))?;
    Ok((id.get(), name))
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn create(&self, record: &Employee) -> Result<Employee, EmployeeRepositoryError> {
        let (id, name) = required_columns(record)?;
        let new_row = NewEmployeeRow {
            id,
            name,
            position: &record.position,
            salary: record.salary,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(employee::table)
            .values(&new_row)
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Employee::from)
            .map_err(map_diesel_error)
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        employee::table
            .find(id.get())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Employee::from))
            .map_err(map_diesel_error)
    }

    async fn list(&self, page: &Page) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut query = employee::table
            .select(EmployeeRow::as_select())
            .order(employee::id.asc())
            .offset(page.offset())
            .into_boxed();
        if let Some(limit) = page.limit() {
            query = query.limit(limit);
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<EmployeeRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn update(&self, record: &Employee) -> Result<Employee, EmployeeRepositoryError> {
        let (id, name) = required_columns(record)?;
        let changes = EmployeeUpdate {
            name,
            position: &record.position,
            salary: record.salary,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<EmployeeRow> = diesel::update(employee::table.find(id))
            .set(&changes)
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(Employee::from)
            .ok_or_else(|| EmployeeRepositoryError::missing(id))
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(employee::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn required_columns_rejects_incomplete_records() {
        let missing_id = Employee {
            name: Some("a".to_owned()),
            ..Employee::default()
        };
        let missing_name = Employee {
            id: Some(EmployeeId::new(1)),
            ..Employee::default()
        };

        assert!(matches!(
            required_columns(&missing_id),
            Err(EmployeeRepositoryError::Query { .. })
        ));
        assert!(matches!(
            required_columns(&missing_name),
            Err(EmployeeRepositoryError::Query { .. })
        ));
    }

    #[rstest]
    fn row_converts_to_complete_employee() {
        let row = EmployeeRow {
            id: 4,
            name: "Ada".to_owned(),
            position: "engineer".to_owned(),
            salary: 10,
        };
        let employee = Employee::from(row);
        assert_eq!(employee.validate(), Ok(EmployeeId::new(4)));
        assert_eq!(employee.position, "engineer");
    }
}
