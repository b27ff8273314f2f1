use std::path::PathBuf;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, TransactionTrait};
use sea_orm_migration::MigratorTrait;

use super::error::StoreError;
use super::migration::Migrator;
use super::seed::{self, SeedRow};

const MEMORY_STORE_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Where the yip table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// A SQLite file, created on first launch.
    File(PathBuf),
    /// A private in-memory database, lost when the store is dropped.
    Memory,
}

impl StoreLocation {
    /// Interpret a configured store path; `:memory:` selects an in-memory store.
    pub fn from_setting(path: &str) -> Self {
        if path == ":memory:" {
            StoreLocation::Memory
        } else {
            StoreLocation::File(PathBuf::from(path))
        }
    }

    fn url(&self, create: bool) -> String {
        match self {
            StoreLocation::File(path) => {
                let mode = if create { "rwc" } else { "rw" };
                format!("sqlite://{}?mode={mode}", path.display())
            }
            StoreLocation::Memory => "sqlite::memory:".to_string(),
        }
    }

    fn exists(&self) -> bool {
        match self {
            StoreLocation::File(path) => path.exists(),
            StoreLocation::Memory => false,
        }
    }
}

/// Configuration for the yip store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub location: StoreLocation,
    /// Loaded once, when the store is created. `None` starts empty.
    pub seed_file: Option<PathBuf>,
    pub max_connections: u32,
    pub log_statements: bool,
}

impl DatabaseConfig {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StoreLocation::File(path.into()),
            seed_file: None,
            max_connections: 1,
            log_statements: false,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            location: StoreLocation::Memory,
            seed_file: None,
            max_connections: 1,
            log_statements: false,
        }
    }

    pub fn with_seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_file = Some(path.into());
        self
    }
}

/// The relation store: one SQLite database holding the `yips` table.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Clone)]
pub struct YipStore {
    conn: DbConn,
}

impl YipStore {
    /// Open the store, creating and seeding it if this is its first launch.
    ///
    /// The seed file is parsed before anything is created on disk. If the
    /// schema or the seed rows then fail to load, the new store file is
    /// removed again, so the next launch is still a first launch.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let first_launch = !config.location.exists();

        let seed_rows = match (&config.seed_file, first_launch) {
            (Some(path), true) => Some(seed::read_seed_file(path)?),
            _ => None,
        };

        let store = Self::connect(config, first_launch).await?;
        if let Err(err) = store.prepare(seed_rows, first_launch).await {
            if first_launch {
                store.discard(&config.location).await;
            }
            return Err(err);
        }

        if !first_launch {
            tracing::info!(location = ?config.location, "Reusing existing yip store");
        }
        Ok(store)
    }

    async fn prepare(
        &self,
        seed_rows: Option<Vec<SeedRow>>,
        first_launch: bool,
    ) -> Result<(), StoreError> {
        self.initialize().await?;

        if let Some(rows) = seed_rows {
            let count = self.seed(rows).await?;
            tracing::info!(rows = count, "Seeded new yip store");
        } else if first_launch {
            tracing::info!("Created empty yip store");
        }
        Ok(())
    }

    /// Close a store whose first launch failed and delete its file.
    async fn discard(self, location: &StoreLocation) {
        if let Err(err) = self.close().await {
            tracing::warn!(error = %err, "Failed to close abandoned yip store");
        }

        if let StoreLocation::File(path) = location {
            match std::fs::remove_file(path) {
                Ok(()) => {
                    tracing::warn!(path = %path.display(), "Removed partially created yip store")
                }
                Err(err) => tracing::error!(
                    path = %path.display(),
                    error = %err,
                    "Failed to remove partially created yip store; delete it before relaunching"
                ),
            }
        }
    }

    /// Connect without touching the schema.
    pub async fn connect(config: &DatabaseConfig, create: bool) -> Result<Self, StoreError> {
        // Every in-memory connection would open its own empty database.
        let pool = match config.location {
            StoreLocation::Memory => 1,
            StoreLocation::File(_) => config.max_connections.max(1),
        };

        let mut opts = ConnectOptions::new(config.location.url(create));
        opts.max_connections(pool)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(config.log_statements);
        if config.location == StoreLocation::Memory {
            // Recycling the only connection would discard every yip.
            opts.idle_timeout(MEMORY_STORE_LIFETIME)
                .max_lifetime(MEMORY_STORE_LIFETIME);
        }

        let conn = Database::connect(opts).await.map_err(StoreError::Init)?;
        tracing::debug!(
            location = ?config.location,
            pool,
            "Yip store connected"
        );

        Ok(Self { conn })
    }

    /// Create the schema if it is missing. Safe to call on every launch.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        Migrator::up(&self.conn, None)
            .await
            .map_err(StoreError::Init)
    }

    /// Bulk-load pre-numbered yips in one transaction; all rows land or none do.
    pub async fn seed(&self, rows: Vec<SeedRow>) -> Result<u64, StoreError> {
        let txn = self.conn.begin().await.map_err(StoreError::Query)?;
        let count = seed::insert_rows(&txn, rows)
            .await
            .map_err(StoreError::Query)?;
        txn.commit().await.map_err(StoreError::Query)?;
        Ok(count)
    }

    /// Connection the query builder's statements execute against.
    pub fn connection(&self) -> &DbConn {
        &self.conn
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.conn.ping().await.map_err(StoreError::Query)
    }

    pub async fn close(self) -> Result<(), StoreError> {
        self.conn.close().await.map_err(StoreError::Query)
    }
}

