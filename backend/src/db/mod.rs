pub mod models;
pub mod pricing;
pub mod schema;

use std::time::Duration;

use anyhow::{anyhow, Context, Error as AnyhowError, Result};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::Mutex;

use crate::config::AppConfig;
use crate::logger::info;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub const IN_MEMORY_URL: &str = ":memory:";

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug)]
pub struct DatabaseHandle {
    pool: SqlitePool,
    pub write_lock: Mutex<()>,
}

impl DatabaseHandle {
    pub fn new(database_url: &str, pool_size: u32) -> Result<Self> {
        info(&format!("DatabaseHandle::new() {}", database_url));

        let manager = ConnectionManager::new(database_url);

        // Every connection to :memory: opens its own database, so the pool has
        // to keep exactly one connection alive for the handle's lifetime.
        let builder = if database_url == IN_MEMORY_URL {
            Pool::builder()
                .max_size(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            Pool::builder()
                .max_size(pool_size)
                .connection_timeout(Duration::from_secs(30))
        };

        let pool = builder
            .build(manager)
            .with_context(|| format!("Failed to create pool for: {}", database_url))?;

        Ok(Self {
            pool,
            write_lock: Mutex::new(()),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.database_url, config.pool_size)
    }

    /// A fresh in-memory database with all migrations applied.
    pub fn in_memory() -> Result<Self> {
        let handle = Self::new(IN_MEMORY_URL, 1)?;
        handle.run_migrations()?;
        Ok(handle)
    }

    pub fn get_conn(&self) -> Result<DbConn> {
        self.pool.get().map_err(AnyhowError::from)
    }

    /// Performs a write operation on the database, guarded by a Mutex write_lock.
    pub fn do_write<F, T>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, diesel::result::Error>,
    {
        let _lock = self.write_lock.lock();
        let mut db_conn = self.pool.get()
            .context("Failed to get connection from pool for write")?;
        operation(&mut db_conn).map_err(AnyhowError::from)
    }

    /// Performs a read operation on the database.
    pub fn do_read<F, T>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, diesel::result::Error>,
    {
        let mut db_conn = self.pool.get()
            .context("Failed to get connection from pool for read")?;
        operation(&mut db_conn).map_err(AnyhowError::from)
    }

    pub fn run_migrations(&self) -> Result<()> {
        let _lock = self.write_lock.lock();
        let mut db_conn = self.get_conn()?;
        let applied = db_conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow!("Failed to execute pending database migrations: {}", e))?;
        info(&format!("Applied {} migration(s)", applied.len()));
        Ok(())
    }
}
