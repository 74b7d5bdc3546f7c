//! Database module for SQLite operations.
//!
//! This module provides:
//! - Connection pool setup and migrations
//! - SQLite pragma configuration
//! - Repository layer for database operations

pub mod migrations;
pub mod repo;

pub use migrations::{init_db, init_db_with_pool_size};
pub use repo::Repository;
