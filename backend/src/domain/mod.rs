//! Domain primitives, ports and services.
//!
//! Purpose: define the user model, the email format rule and the error
//! taxonomy shared by every inbound and outbound adapter. Nothing in here
//! knows about HTTP or SQL.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure categories.
//! - User / UserDraft / UserId: read model and write input.
//! - EmailAddress / is_valid_email: format validation.
//! - UsersService: driving-port implementation over a `UserRepository`.
//! - TraceId: request correlation identifier.
//! - seed_demo_user: idempotent demo row for new databases.

pub mod demo_seed;
pub mod email;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod users_service;

pub use self::demo_seed::{DemoSeedError, DemoSeedOutcome, seed_demo_user};
pub use self::email::{EmailAddress, InvalidEmail, is_valid_email};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};
pub use self::users_service::{
    DATABASE_CONNECTION_FAILED, EMAIL_ALREADY_EXISTS, USER_NOT_FOUND, UsersService,
};
