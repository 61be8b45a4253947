//! Diesel table definitions for the persistence layer.

diesel::table! {
    /// Stored user records keyed by the server-assigned identifier.
    users (id) {
        /// Primary key issued by the id generator.
        id -> BigInt,
        /// Display name.
        name -> Varchar,
        /// Contact address.
        email -> Varchar,
        /// Free-text profession.
        profession -> Varchar,
    }
}
