// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a connection pool over the corpus database file.
///
/// Pool configuration:
/// - Foreign keys enabled
/// - WAL journal so bookmark writes do not block corpus readers
/// - Busy timeout set to avoid immediate errors
pub fn create_connection_pool(db_path: &Path, max_size: u32) -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(max_size.max(1))
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create connection pool: {}", e)))?;

    log::info!("Opened corpus database at {}", db_path.display());
    Ok(pool)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(AppError::Database)?;

    Ok(conn)
}
