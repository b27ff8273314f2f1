//! The relation store: SQLite via SeaORM.

mod connections;
mod error;
mod migration;
mod query;
mod seed;
mod sqlite_repo;

pub mod entity;

pub use connections::{DatabaseConfig, StoreLocation, YipStore};
pub use error::StoreError;
pub use migration::Migrator;
pub use query::YipQuery;
pub use seed::{SeedRow, parse_seed, read_seed_file};
pub use sqlite_repo::SqliteYipRepository;
