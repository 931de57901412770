//! Integration tests for `DieselUserRepository` against a temporary SQLite
//! file.

use futures_util::future::join_all;
use rstest::{fixture, rstest};
use users_api::domain::ports::{UserPersistenceError, UserRepository};
use users_api::domain::{EmailAddress, User, UserDraft, UserId};
use users_api::outbound::persistence::{DieselUserRepository, ensure_schema};
use users_api::test_support::{TestDatabase, unreachable_connector};

fn draft(name: &str, email: &str) -> UserDraft {
    UserDraft::new(name, EmailAddress::new(email).expect("valid email"))
}

#[fixture]
fn alice() -> UserDraft {
    draft("Alice", "alice@example.com")
}

async fn database() -> TestDatabase {
    TestDatabase::initialised().await.expect("test database")
}

#[rstest]
#[tokio::test]
async fn insert_assigns_sequential_ids(alice: UserDraft) {
    let db = database().await;
    let repo = db.repository();

    repo.insert(&alice).await.expect("insert alice");
    repo.insert(&draft("Bob", "bob@example.com"))
        .await
        .expect("insert bob");

    let users = repo.list().await.expect("list");
    assert_eq!(
        users,
        vec![
            User::new(UserId::new(1), "Alice", "alice@example.com"),
            User::new(UserId::new(2), "Bob", "bob@example.com"),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn ids_are_not_reused_after_delete(alice: UserDraft) {
    let db = database().await;
    let repo = db.repository();

    repo.insert(&alice).await.expect("insert alice");
    assert_eq!(repo.delete(UserId::new(1)).await.expect("delete"), 1);
    repo.insert(&draft("Bob", "bob@example.com"))
        .await
        .expect("insert bob");

    let users = repo.list().await.expect("list");
    assert_eq!(users.len(), 1);
    assert_eq!(users.first().map(User::id), Some(UserId::new(2)));
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_reported_and_first_row_kept(alice: UserDraft) {
    let db = database().await;
    let repo = db.repository();
    repo.insert(&alice).await.expect("insert alice");

    let err = repo
        .insert(&draft("Other", "alice@example.com"))
        .await
        .expect_err("duplicate email");
    assert!(matches!(err, UserPersistenceError::DuplicateEmail { .. }));

    let users = repo.list().await.expect("list");
    assert_eq!(users.len(), 1);
    assert_eq!(users.first().map(User::name), Some("Alice"));
}

#[rstest]
#[tokio::test]
async fn find_by_id_returns_none_for_unknown_rows(alice: UserDraft) {
    let db = database().await;
    let repo = db.repository();
    repo.insert(&alice).await.expect("insert alice");

    let found = repo.find_by_id(UserId::new(1)).await.expect("lookup");
    assert_eq!(found.as_ref().map(User::email), Some("alice@example.com"));
    assert!(repo.find_by_id(UserId::new(999)).await.expect("lookup").is_none());
}

#[rstest]
#[tokio::test]
async fn update_reports_affected_rows(alice: UserDraft) {
    let db = database().await;
    let repo = db.repository();
    repo.insert(&alice).await.expect("insert alice");

    let replacement = draft("Alice B", "aliceb@example.com");
    assert_eq!(repo.update(UserId::new(1), &replacement).await.expect("update"), 1);
    assert_eq!(repo.update(UserId::new(7), &replacement).await.expect("update"), 0);

    let stored = repo
        .find_by_id(UserId::new(1))
        .await
        .expect("lookup")
        .expect("row exists");
    assert_eq!(stored.name(), "Alice B");
    assert_eq!(stored.email(), "aliceb@example.com");
}

#[rstest]
#[tokio::test]
async fn update_to_taken_email_is_a_duplicate(alice: UserDraft) {
    let db = database().await;
    let repo = db.repository();
    repo.insert(&alice).await.expect("insert alice");
    repo.insert(&draft("Bob", "bob@example.com"))
        .await
        .expect("insert bob");

    let err = repo
        .update(UserId::new(2), &alice)
        .await
        .expect_err("email taken");
    assert!(matches!(err, UserPersistenceError::DuplicateEmail { .. }));
}

#[rstest]
#[tokio::test]
async fn update_of_missing_row_never_checks_uniqueness(alice: UserDraft) {
    let db = database().await;
    let repo = db.repository();
    repo.insert(&alice).await.expect("insert alice");

    // No row matches, so the unique index on email is never consulted.
    let rows = repo
        .update(UserId::new(404), &draft("Someone", "alice@example.com"))
        .await
        .expect("no conflict without a target row");
    assert_eq!(rows, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_inserts_wait_for_the_write_lock() {
    const WRITERS: usize = 64;
    let db = database().await;

    let handles: Vec<_> = (0..WRITERS)
        .map(|n| {
            let repo = db.repository();
            tokio::spawn(async move {
                repo.insert(&draft("Writer", &format!("writer{n}@example.com")))
                    .await
            })
        })
        .collect();

    for outcome in join_all(handles).await {
        outcome.expect("task completes").expect("insert succeeds");
    }
    assert_eq!(db.repository().list().await.expect("list").len(), WRITERS);
}

#[rstest]
#[tokio::test]
async fn ensure_schema_is_idempotent(alice: UserDraft) {
    let db = database().await;
    db.repository().insert(&alice).await.expect("insert alice");

    ensure_schema(&db.connector()).await.expect("second run");
    assert_eq!(db.repository().list().await.expect("list").len(), 1);
}

#[rstest]
#[tokio::test]
async fn missing_table_is_a_query_failure() {
    let db = TestDatabase::empty().expect("test database");
    let err = db.repository().list().await.expect_err("no table");
    assert!(matches!(err, UserPersistenceError::Query { .. }));
}

#[rstest]
#[tokio::test]
async fn unreachable_store_is_a_connection_failure(alice: UserDraft) {
    let repo = DieselUserRepository::new(unreachable_connector());

    let err = repo.insert(&alice).await.expect_err("cannot open");
    assert!(matches!(err, UserPersistenceError::Connection { .. }));
    let err = repo.find_by_id(UserId::new(1)).await.expect_err("cannot open");
    assert!(matches!(err, UserPersistenceError::Connection { .. }));
}
