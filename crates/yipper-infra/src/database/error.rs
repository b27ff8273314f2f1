//! Store lifecycle errors.

use std::path::PathBuf;

use sea_orm::DbErr;
use thiserror::Error;

use yipper_core::RepoError;

/// Failures while opening, initializing, seeding or querying the yip store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open or initialize the yip store: {0}")]
    Init(#[source] DbErr),

    #[error("failed to read seed file {}: {source}", path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed data on line {line}: {reason}")]
    Seed { line: usize, reason: String },

    #[error("yip store query failed: {0}")]
    Query(#[source] DbErr),
}

/// Map a SeaORM error onto the repository taxonomy.
pub(crate) fn repo_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}
