//! # Yipper Infrastructure
//!
//! Concrete implementations of the ports defined in `yipper-core`:
//! the SQLite relation store, its query builder and the yip repository.

pub mod database;

pub use database::{DatabaseConfig, SqliteYipRepository, StoreError, StoreLocation, YipStore};
