//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; these
//! wrappers mirror their serialised shape for utoipa's external schema
//! registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Free-form display name.
    #[schema(example = "Alice")]
    name: String,
    /// Unique email address.
    #[schema(example = "alice@example.com")]
    email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn user_schema_mirrors_domain_fields() {
        let schema_json =
            serde_json::to_string(&UserSchema::schema()).expect("schema serialises to JSON");
        // utoipa replaces :: with . in schema names
        assert_eq!(UserSchema::name(), "crate.domain.User");
        for field in ["id", "name", "email"] {
            assert!(schema_json.contains(field), "schema should contain {field}");
        }
    }
}
