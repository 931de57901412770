//! Diesel table definitions for the SQLite user store.

diesel::table! {
    /// Registered users. `email` carries a UNIQUE constraint.
    users (id) {
        id -> BigInt,
        name -> Text,
        email -> Text,
    }
}
