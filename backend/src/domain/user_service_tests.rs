//! Tests for the user service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockUserRepository, UserPersistenceError};

#[fixture]
fn ann() -> User {
    User::try_from_parts(0, "Ann", "ann@x.com", "Engineer").expect("valid user")
}

#[rstest]
#[tokio::test]
async fn list_all_returns_repository_records(ann: User) {
    let expected = vec![ann.clone()];
    let mut repo = MockUserRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(move || Ok(vec![ann]));

    let service = UserServiceImpl::new(Arc::new(repo));
    let users = service.list_all().await.expect("list succeeds");

    assert_eq!(users, expected);
}

#[rstest]
#[tokio::test]
async fn get_by_id_passes_identifier_through(ann: User) {
    let expected = ann.clone();
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(UserId::new(0)))
        .times(1)
        .return_once(move |_| Ok(Some(ann)));

    let service = UserServiceImpl::new(Arc::new(repo));
    let found = service
        .get_by_id(UserId::new(0))
        .await
        .expect("lookup succeeds");

    assert_eq!(found, Some(expected));
}

#[rstest]
#[tokio::test]
async fn get_by_id_reports_absence_as_none() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let service = UserServiceImpl::new(Arc::new(repo));
    let found = service
        .get_by_id(UserId::new(42))
        .await
        .expect("lookup succeeds");

    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn save_returns_stored_record(ann: User) {
    let mut repo = MockUserRepository::new();
    repo.expect_save()
        .times(1)
        .returning(|user| Ok(user.clone()));

    let service = UserServiceImpl::new(Arc::new(repo));
    let stored = service.save(ann.clone()).await.expect("save succeeds");

    assert_eq!(stored, ann);
}

#[rstest]
#[tokio::test]
async fn delete_forwards_user(ann: User) {
    let mut repo = MockUserRepository::new();
    repo.expect_delete()
        .withf(|user| user.id() == UserId::new(0))
        .times(1)
        .return_once(|_| Ok(()));

    let service = UserServiceImpl::new(Arc::new(repo));
    service.delete(&ann).await.expect("delete succeeds");
}

#[rstest]
#[case(UserPersistenceError::connection("pool exhausted"))]
#[case(UserPersistenceError::query("relation \"users\" does not exist"))]
#[tokio::test]
async fn persistence_failures_become_unexpected_errors(#[case] failure: UserPersistenceError) {
    let detail = failure.to_string();
    let mut repo = MockUserRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(move || Err(failure));

    let service = UserServiceImpl::new(Arc::new(repo));
    let error = service.list_all().await.expect_err("failure propagates");

    assert_eq!(error.code(), ErrorCode::MalformedRequest);
    assert_eq!(error.message(), detail);
}
