//! Behaviour tests for the user lifecycle through the users service and the
//! Diesel SQLite adapter.
//!
//! Steps stay synchronous and drive async calls on a runtime owned by the
//! world, so the database outlives every step of a scenario.

use std::cell::RefCell;
use std::sync::Arc;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;
use users_api::domain::ports::{UsersCommand, UsersQuery};
use users_api::domain::{EmailAddress, Error, ErrorCode, UserDraft, UserId, UsersService};
use users_api::outbound::persistence::DieselUserRepository;
use users_api::test_support::TestDatabase;

struct LifecycleWorld {
    runtime: Runtime,
    service: UsersService<DieselUserRepository>,
    last_result: RefCell<Option<Result<(), Error>>>,
    _database: TestDatabase,
}

impl LifecycleWorld {
    fn new() -> Self {
        let runtime = Runtime::new().expect("tokio runtime should initialise");
        let database = runtime
            .block_on(TestDatabase::initialised())
            .expect("test database should initialise");
        let service = UsersService::new(Arc::new(database.repository()));
        Self {
            runtime,
            service,
            last_result: RefCell::new(None),
            _database: database,
        }
    }

    fn record(&self, result: Result<(), Error>) {
        *self.last_result.borrow_mut() = Some(result);
    }

    fn last_error_code(&self) -> Option<ErrorCode> {
        self.last_result
            .borrow()
            .as_ref()
            .expect("an operation should have run")
            .as_ref()
            .err()
            .map(Error::code)
    }
}

fn draft(name: &str, email: &str) -> UserDraft {
    UserDraft::new(name, EmailAddress::new(email).expect("valid email"))
}

#[fixture]
fn world() -> LifecycleWorld {
    LifecycleWorld::new()
}

#[given("an empty user store")]
fn an_empty_user_store(world: &LifecycleWorld) {
    let users = world
        .runtime
        .block_on(world.service.list_users())
        .expect("list should succeed");
    assert!(users.is_empty());
}

#[when("a user named {name} with email {email} is created")]
fn a_user_is_created(world: &LifecycleWorld, name: String, email: String) {
    let result = world
        .runtime
        .block_on(world.service.create(&draft(&name, &email)));
    world.record(result);
}

#[when("user {id} is renamed to {name} with email {email}")]
fn a_user_is_renamed(world: &LifecycleWorld, id: i64, name: String, email: String) {
    let result = world
        .runtime
        .block_on(world.service.update(UserId::new(id), &draft(&name, &email)));
    world.record(result);
}

#[when("user {id} is deleted")]
fn a_user_is_deleted(world: &LifecycleWorld, id: i64) {
    let result = world
        .runtime
        .block_on(world.service.delete(UserId::new(id)));
    world.record(result);
}

#[then("the last operation succeeded")]
fn the_last_operation_succeeded(world: &LifecycleWorld) {
    assert_eq!(world.last_error_code(), None);
}

#[then("the last operation failed with a conflict")]
fn the_last_operation_failed_with_a_conflict(world: &LifecycleWorld) {
    assert_eq!(world.last_error_code(), Some(ErrorCode::Conflict));
}

#[then("the last operation failed as not found")]
fn the_last_operation_failed_as_not_found(world: &LifecycleWorld) {
    assert_eq!(world.last_error_code(), Some(ErrorCode::NotFound));
}

#[then("the user count is {count}")]
fn the_user_count_is(world: &LifecycleWorld, count: usize) {
    let users = world
        .runtime
        .block_on(world.service.list_users())
        .expect("list should succeed");
    assert_eq!(users.len(), count);
}

#[then("user {id} has email {email}")]
fn user_has_email(world: &LifecycleWorld, id: i64, email: String) {
    let user = world
        .runtime
        .block_on(world.service.get_user(UserId::new(id)))
        .expect("user should exist");
    assert_eq!(user.email(), email);
}

#[then("user {id} is not found")]
fn user_is_not_found(world: &LifecycleWorld, id: i64) {
    let err = world
        .runtime
        .block_on(world.service.get_user(UserId::new(id)))
        .expect_err("user should be gone");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[scenario(
    path = "tests/features/user_lifecycle.feature",
    name = "A user is created, renamed and removed"
)]
fn a_user_is_created_renamed_and_removed(world: LifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/user_lifecycle.feature",
    name = "A duplicate email is rejected"
)]
fn a_duplicate_email_is_rejected(world: LifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/user_lifecycle.feature",
    name = "Removing a missing user reports not found"
)]
fn removing_a_missing_user_reports_not_found(world: LifecycleWorld) {
    drop(world);
}
