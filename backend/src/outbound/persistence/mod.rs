//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel rows and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Async-safe pooling**: connections come from a `bb8` pool through
//!   `diesel-async`; the pool is passed in, never global.
//! - **Strongly typed errors**: database failures map onto
//!   `EmployeeRepositoryError`.
//!
//! # Example
//!
//! ```no_run
//! use employees::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), employees::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/employees")).await?;
//! let repo = DieselEmployeeRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_employee_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{
    MIGRATIONS, MigrationError, run_pending_migrations, run_pending_migrations_async,
};
pub use pool::{DbPool, PoolConfig, PoolError};
