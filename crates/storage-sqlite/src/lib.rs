//! SQLite storage implementation for FxGrid.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository trait defined in `fxgrid-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Append-only batch persistence for raw observations and derived rates
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The core is database-agnostic and works with traits.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-sqlite (this crate)
//!       │
//!       ▼
//!   SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod fx;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use fx::RateRepository;

// Re-export from fxgrid-core for convenience
pub use fxgrid_core::errors::{DatabaseError, Error, Result};
