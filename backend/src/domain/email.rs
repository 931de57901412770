//! Email address format validation.
//!
//! The check is purely syntactic: a local part, `@`, a domain, `.` and an
//! alphabetic top-level domain of at least two letters. Deliverability, DNS
//! and case normalisation are out of scope.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Anchored to the whole input, including any trailing newline.
#[expect(clippy::expect_used, reason = "static pattern compiles")]
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\z")
        .expect("email pattern is valid")
});

/// Return `true` when `candidate` matches the email grammar in full.
///
/// # Examples
/// ```
/// use users_api::domain::is_valid_email;
///
/// assert!(is_valid_email("alice@example.com"));
/// assert!(!is_valid_email("bob@@x"));
/// assert!(!is_valid_email("alice@example.com trailing"));
/// ```
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// Error returned when a string does not satisfy [`is_valid_email`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid email format")]
pub struct InvalidEmail;

/// Email address that passed format validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, InvalidEmail> {
        let email = email.into();
        if is_valid_email(&email) {
            Ok(Self(email))
        } else {
            Err(InvalidEmail)
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = InvalidEmail;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
