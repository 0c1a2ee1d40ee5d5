//! # Golf Club Database Crate
//!
//! This crate is the persistence boundary of the application. It hides the
//! SQL and storage details behind two repository traits so the service layer
//! never sees a connection pool.
//!
//! ## Public API
//!
//! - `connect`: establishes the PostgreSQL connection pool from `DatabaseSettings`.
//! - `run_migrations`: applies the embedded migrations, ensuring the schema is up-to-date.
//! - `TournamentRepository` / `GolfCourseRepository`: the repository contracts.
//! - `PgTournamentRepository` / `PgGolfCourseRepository`: PostgreSQL backends.
//! - `InMemoryTournamentRepository` / `InMemoryGolfCourseRepository`: process-local
//!   backends for `--in-memory` serving and tests.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use memory::{InMemoryGolfCourseRepository, InMemoryTournamentRepository};
pub use postgres::{PgGolfCourseRepository, PgTournamentRepository};
pub use repository::{GolfCourseRepository, TournamentRepository};
