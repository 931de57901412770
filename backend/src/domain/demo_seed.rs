//! Demo user seeding for freshly initialised databases.

use tracing::info;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, InvalidEmail, User, UserDraft};

/// Name of the demo user.
pub const DEMO_NAME: &str = "Alice";
/// Email of the demo user.
pub const DEMO_EMAIL: &str = "alice@example.com";

/// Result of a demo seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSeedOutcome {
    /// Whether this run inserted the demo user.
    pub inserted: bool,
    /// Every stored user after the run.
    pub users: Vec<User>,
}

/// Errors returned while seeding the demo user.
#[derive(Debug, thiserror::Error)]
pub enum DemoSeedError {
    #[error("demo email rejected: {0}")]
    Email(#[from] InvalidEmail),
    #[error(transparent)]
    Persistence(#[from] UserPersistenceError),
}

/// Insert the demo user unless its email is taken, then list every row.
///
/// Re-running is harmless: a duplicate email counts as already seeded.
///
/// # Errors
///
/// Returns [`DemoSeedError::Persistence`] for any store failure other than
/// the duplicate email.
pub async fn seed_demo_user<R>(repository: &R) -> Result<DemoSeedOutcome, DemoSeedError>
where
    R: UserRepository + ?Sized,
{
    let draft = UserDraft::new(DEMO_NAME, EmailAddress::new(DEMO_EMAIL)?);
    let inserted = match repository.insert(&draft).await {
        Ok(()) => true,
        Err(UserPersistenceError::DuplicateEmail { .. }) => false,
        Err(err) => return Err(err.into()),
    };
    info!(email = DEMO_EMAIL, inserted, "demo seed applied");

    let users = repository.list().await?;
    for user in &users {
        info!(id = %user.id(), name = user.name(), email = user.email(), "stored user");
    }
    Ok(DemoSeedOutcome { inserted, users })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use crate::domain::ports::MockUserRepository;
    use rstest::rstest;

    fn alice() -> User {
        User::new(UserId::new(1), DEMO_NAME, DEMO_EMAIL)
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_email_counts_as_seeded() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(|_| Err(UserPersistenceError::duplicate_email("users.email")));
        repo.expect_list().times(1).return_once(|| Ok(vec![alice()]));

        let outcome = seed_demo_user(&repo).await.expect("seed succeeds");
        assert!(!outcome.inserted);
        assert_eq!(outcome.users, vec![alice()]);
    }

    #[rstest]
    #[tokio::test]
    async fn other_insert_failures_propagate() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(|_| Err(UserPersistenceError::query("disk I/O error")));
        repo.expect_list().never();

        let err = seed_demo_user(&repo).await.expect_err("insert fails");
        assert!(matches!(
            err,
            DemoSeedError::Persistence(UserPersistenceError::Query { .. })
        ));
    }
}
