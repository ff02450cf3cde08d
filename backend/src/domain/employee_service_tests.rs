//! Tests for the employee service.

use std::sync::Arc;

use mockall::predicate::eq;
use pagination::Page;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockEmployeeRepository;

#[fixture]
fn employee() -> Employee {
    Employee::new(EmployeeId::new(1), "test", "engineer", 1000)
}

fn service(repo: MockEmployeeRepository) -> EmployeeService<MockEmployeeRepository> {
    EmployeeService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn create_persists_new_employee(employee: Employee) {
    let stored = employee.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(EmployeeId::new(1)))
        .times(1)
        .return_once(|_| Ok(None));
    repo.expect_create()
        .times(1)
        .return_once(move |_| Ok(stored));

    let response = service(repo)
        .create(CreateEmployeeRequest {
            employee: Some(employee.clone()),
        })
        .await
        .expect("create succeeds");

    assert_eq!(response.employee, Some(employee));
}

#[rstest]
#[tokio::test]
async fn create_returns_store_result_verbatim(employee: Employee) {
    let stored = Employee::new(EmployeeId::new(1), "stored", "other", 5);
    let expected = stored.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));
    repo.expect_create().return_once(move |_| Ok(stored));

    let response = service(repo)
        .create(CreateEmployeeRequest {
            employee: Some(employee),
        })
        .await
        .expect("create succeeds");

    assert_eq!(response.employee, Some(expected));
}

#[rstest]
#[tokio::test]
async fn create_without_body_is_a_no_op() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(0);
    repo.expect_create().times(0);

    let response = service(repo)
        .create(CreateEmployeeRequest::default())
        .await
        .expect("empty create succeeds");

    assert_eq!(response.employee, None);
}

#[rstest]
#[case::missing_id(Employee { id: None, ..employee() }, ErrorCode::MissingParam, "employee.id")]
#[case::missing_name(Employee { name: None, ..employee() }, ErrorCode::MissingParam, "employee.name")]
#[case::empty_name(Employee { name: Some(String::new()), ..employee() }, ErrorCode::InvalidParam, "employee.name")]
#[tokio::test]
async fn create_rejects_invalid_employee_before_store(
    #[case] candidate: Employee,
    #[case] code: ErrorCode,
    #[case] param: &str,
) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(0);
    repo.expect_create().times(0);

    let error = service(repo)
        .create(CreateEmployeeRequest {
            employee: Some(candidate),
        })
        .await
        .expect_err("validation fails");

    assert_eq!(error.code(), code);
    assert_eq!(error.params(), vec![param]);
}

#[rstest]
#[tokio::test]
async fn create_conflicts_with_existing_employee(employee: Employee) {
    let existing = employee.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_create().times(0);

    let error = service(repo)
        .create(CreateEmployeeRequest {
            employee: Some(employee),
        })
        .await
        .expect_err("duplicate id");

    assert_eq!(error.code(), ErrorCode::EntityAlreadyExists);
}

#[rstest]
#[tokio::test]
async fn create_propagates_lookup_failure(employee: Employee) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .return_once(|_| Err(EmployeeRepositoryError::connection("pool exhausted")));
    repo.expect_create().times(0);

    let error = service(repo)
        .create(CreateEmployeeRequest {
            employee: Some(employee),
        })
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert!(error.message().contains("pool exhausted"));
}

#[rstest]
#[tokio::test]
async fn create_propagates_insert_failure(employee: Employee) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));
    repo.expect_create()
        .return_once(|_| Err(EmployeeRepositoryError::query("constraint violated")));

    let error = service(repo)
        .create(CreateEmployeeRequest {
            employee: Some(employee),
        })
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn get_returns_stored_employee(employee: Employee) {
    let stored = employee.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(EmployeeId::new(1)))
        .times(2)
        .returning(move |_| Ok(Some(stored.clone())));
    let service = service(repo);

    let first = service
        .get(GetEmployeeRequest { id: "1".to_owned() })
        .await
        .expect("get succeeds");
    let second = service
        .get(GetEmployeeRequest { id: "1".to_owned() })
        .await
        .expect("get succeeds");

    assert_eq!(first, employee);
    assert_eq!(first, second);
}

#[rstest]
#[case("")]
#[case("abc")]
#[tokio::test]
async fn get_rejects_malformed_id(#[case] raw: &str) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(0);

    let error = service(repo)
        .get(GetEmployeeRequest { id: raw.to_owned() })
        .await
        .expect_err("invalid id");

    assert_eq!(error.code(), ErrorCode::InvalidParam);
    assert_eq!(error.params(), vec!["id"]);
}

#[rstest]
#[tokio::test]
async fn get_reports_missing_employee() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));

    let error = service(repo)
        .get(GetEmployeeRequest { id: "7".to_owned() })
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::EntityNotFound);
    assert_eq!(
        error.details(),
        Some(&serde_json::json!({ "name": "id", "value": "7" }))
    );
}

#[rstest]
#[tokio::test]
async fn list_passes_page_through() {
    let page = Page::new(5, 10).expect("valid page");
    let stored = vec![
        Employee::new(EmployeeId::new(6), "a", "", 0),
        Employee::new(EmployeeId::new(7), "b", "", 0),
    ];
    let expected = stored.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_list()
        .withf(move |requested| *requested == page)
        .times(1)
        .return_once(move |_| Ok(stored));

    let response = service(repo)
        .list(ListEmployeesRequest { page })
        .await
        .expect("list succeeds");

    assert_eq!(response.page, page);
    assert_eq!(response.employees, expected);
}

#[rstest]
#[tokio::test]
async fn list_returns_empty_for_empty_store() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_list().return_once(|_| Ok(Vec::new()));

    let response = service(repo)
        .list(ListEmployeesRequest::default())
        .await
        .expect("list succeeds");

    assert!(response.employees.is_empty());
}

#[rstest]
#[tokio::test]
async fn update_overwrites_existing_employee(employee: Employee) {
    let existing = employee.clone();
    let renamed = Employee {
        name: Some("renamed".to_owned()),
        ..employee
    };
    let stored = renamed.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_update()
        .times(1)
        .return_once(move |_| Ok(stored));

    let response = service(repo)
        .update(UpdateEmployeeRequest {
            employee: Some(renamed.clone()),
        })
        .await
        .expect("update succeeds");

    assert_eq!(response.employee, Some(renamed));
}

#[rstest]
#[tokio::test]
async fn update_reports_missing_employee(employee: Employee) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));
    repo.expect_update().times(0);

    let error = service(repo)
        .update(UpdateEmployeeRequest {
            employee: Some(employee),
        })
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::EntityNotFound);
}

#[rstest]
#[tokio::test]
async fn update_of_record_removed_after_lookup_is_not_found(employee: Employee) {
    let existing = employee.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_update()
        .times(1)
        .return_once(|_| Err(EmployeeRepositoryError::missing(1_i64)));

    let error = service(repo)
        .update(UpdateEmployeeRequest {
            employee: Some(employee),
        })
        .await
        .expect_err("record vanished");

    assert_eq!(
        error,
        Error::entity_not_found("id", "1"),
        "a concurrent delete surfaces as not found rather than a store failure"
    );
}

#[rstest]
#[tokio::test]
async fn update_propagates_store_failure(employee: Employee) {
    let existing = employee.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_update()
        .return_once(|_| Err(EmployeeRepositoryError::query("deadlock detected")));

    let error = service(repo)
        .update(UpdateEmployeeRequest {
            employee: Some(employee),
        })
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn update_validates_before_lookup() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(0);

    let error = service(repo)
        .update(UpdateEmployeeRequest {
            employee: Some(Employee::default()),
        })
        .await
        .expect_err("missing id");

    assert_eq!(error.code(), ErrorCode::MissingParam);
    assert_eq!(error.params(), vec!["employee.id"]);
}

#[rstest]
#[tokio::test]
async fn update_without_body_is_a_no_op() {
    let response = service(MockEmployeeRepository::new())
        .update(UpdateEmployeeRequest::default())
        .await
        .expect("empty update succeeds");

    assert_eq!(response.employee, None);
}

#[rstest]
#[tokio::test]
async fn delete_skips_existence_check() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(0);
    repo.expect_delete()
        .with(eq(EmployeeId::new(3)))
        .times(1)
        .return_once(|_| Ok(()));

    service(repo)
        .delete(DeleteEmployeeRequest { id: "3".to_owned() })
        .await
        .expect("delete succeeds");
}

#[rstest]
#[case("")]
#[case("abc")]
#[tokio::test]
async fn delete_rejects_malformed_id(#[case] raw: &str) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_delete().times(0);

    let error = service(repo)
        .delete(DeleteEmployeeRequest { id: raw.to_owned() })
        .await
        .expect_err("invalid id");

    assert_eq!(error.code(), ErrorCode::InvalidParam);
}

#[rstest]
#[tokio::test]
async fn delete_propagates_store_failure() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_delete()
        .return_once(|_| Err(EmployeeRepositoryError::query("locked")));

    let error = service(repo)
        .delete(DeleteEmployeeRequest { id: "3".to_owned() })
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
