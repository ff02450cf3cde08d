//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes the table.

diesel::table! {
    /// Employee records keyed by a caller-assigned integer id.
    employee (id) {
        /// Primary key supplied by the caller.
        id -> Int8,
        /// Display name (max 50 characters).
        name -> Varchar,
        /// Job title (max 50 characters).
        position -> Varchar,
        /// Salary in whole currency units.
        salary -> Int8,
    }
}
