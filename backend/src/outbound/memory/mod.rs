//! In-memory `EmployeeRepository` used when no database is configured.
//!
//! Records live in a `BTreeMap` behind an instance-owned `RwLock`, so list
//! results come back in key order exactly like the SQL adapter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use pagination::Page;
use tokio::sync::RwLock;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId};

/// Map-backed employee store.
///
/// # Examples
/// ```
/// use employees::domain::{Employee, EmployeeId};
/// use employees::domain::ports::EmployeeRepository;
/// use employees::outbound::memory::InMemoryEmployeeRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryEmployeeRepository::default();
/// let ada = Employee::new(EmployeeId::new(1), "Ada", "engineer", 10);
/// repo.create(&ada).await.expect("insert");
/// assert_eq!(repo.find_by_id(EmployeeId::new(1)).await.expect("lookup"), Some(ada));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: RwLock<BTreeMap<EmployeeId, Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Start from an existing set of records.
    pub fn with_records(records: impl IntoIterator<Item = Employee>) -> Self {
        let records = records
            .into_iter()
            .filter_map(|employee| employee.id.map(|id| (id, employee)))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

fn require_id(employee: &Employee) -> Result<EmployeeId, EmployeeRepositoryError> {
    employee
        .id
        .ok_or_else(|| EmployeeRepositoryError::query("employee id is required"))
}

fn to_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: &Employee) -> Result<Employee, EmployeeRepositoryError> {
        let id = require_id(employee)?;
        let mut records = self.records.write().await;
        if records.contains_key(&id) {
            return Err(EmployeeRepositoryError::query("duplicate key"));
        }
        records.insert(id, employee.clone());
        Ok(employee.clone())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn list(&self, page: &Page) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let records = self.records.read().await;
        let window = records.values().skip(to_index(page.offset()));
        let listed: Vec<Employee> = match page.limit() {
            Some(limit) => window.take(to_index(limit)).cloned().collect(),
            None => window.cloned().collect(),
        };
        Ok(listed)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, EmployeeRepositoryError> {
        let id = require_id(employee)?;
        let mut records = self.records.write().await;
        let slot = records
            .get_mut(&id)
            .ok_or_else(|| EmployeeRepositoryError::missing(id.get()))?;
        *slot = employee.clone();
        Ok(employee.clone())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        self.records.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    fn employee(id: i64) -> Employee {
        Employee::new(EmployeeId::new(id), format!("employee-{id}"), "staff", id * 100)
    }

    #[fixture]
    fn seeded() -> InMemoryEmployeeRepository {
        InMemoryEmployeeRepository::with_records((1..=5).rev().map(employee))
    }

    #[rstest]
    #[case(0, 20, vec![1, 2, 3, 4, 5])]
    #[case(1, 2, vec![2, 3])]
    #[case(4, 10, vec![5])]
    #[case(9, 10, vec![])]
    #[tokio::test]
    async fn list_applies_offset_and_limit(
        seeded: InMemoryEmployeeRepository,
        #[case] offset: i64,
        #[case] size: i64,
        #[case] expected: Vec<i64>,
    ) {
        let page = Page::new(offset, size).expect("valid page");
        let ids: Vec<i64> = seeded
            .list(&page)
            .await
            .expect("list succeeds")
            .into_iter()
            .filter_map(|e| e.id.map(EmployeeId::get))
            .collect();
        assert_eq!(ids, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn unbounded_page_returns_everything_after_offset(seeded: InMemoryEmployeeRepository) {
        let page = Page::new(2, pagination::UNBOUNDED_PAGE_SIZE).expect("valid page");
        let listed = seeded.list(&page).await.expect("list succeeds");
        assert_eq!(listed.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_duplicate_key(seeded: InMemoryEmployeeRepository) {
        let result = seeded.create(&employee(1)).await;
        assert!(matches!(result, Err(EmployeeRepositoryError::Query { .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_record(seeded: InMemoryEmployeeRepository) {
        let renamed = Employee::new(EmployeeId::new(2), "renamed", "lead", 1);
        seeded.update(&renamed).await.expect("update succeeds");
        let found = seeded
            .find_by_id(EmployeeId::new(2))
            .await
            .expect("lookup succeeds");
        assert_eq!(found, Some(renamed));
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_missing_record_reports_missing() {
        let repo = InMemoryEmployeeRepository::default();
        assert_eq!(
            repo.update(&employee(1)).await,
            Err(EmployeeRepositoryError::missing(1_i64))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn delete_is_idempotent(seeded: InMemoryEmployeeRepository) {
        seeded.delete(EmployeeId::new(3)).await.expect("first delete");
        seeded.delete(EmployeeId::new(3)).await.expect("second delete");
        let found = seeded
            .find_by_id(EmployeeId::new(3))
            .await
            .expect("lookup succeeds");
        assert!(found.is_none());
    }
}
