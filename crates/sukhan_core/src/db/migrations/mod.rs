//! SQLite migration registry and executor for the preference database.
//!
//! # Responsibility
//! - Register schema migrations in strictly increasing order.
//! - Apply pending migrations in one transaction.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.

use crate::db::{DbError, DbLocation, DbResult};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_preferences.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
///
/// # Errors
/// - [`DbError::UnsupportedSchemaVersion`] when the file was written by a
///   newer binary.
/// - [`DbError::Migrate`] when a migration statement fails; nothing is
///   committed in that case.
pub fn apply_migrations(conn: &mut Connection, location: &DbLocation) -> DbResult<()> {
    let migrate_error = |source: rusqlite::Error| DbError::Migrate {
        location: location.clone(),
        source,
    };

    let current_version = current_user_version(conn).map_err(migrate_error)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            location: location.clone(),
            db_version: current_version,
            latest_supported: latest,
        });
    }
    if current_version == latest {
        return Ok(());
    }

    run_pending(conn, current_version).map_err(migrate_error)?;

    info!(
        "event=db_migrate module=db status=ok mode={} from_version={} to_version={}",
        location.mode(),
        current_version,
        latest
    );
    Ok(())
}

fn run_pending(conn: &mut Connection, current_version: u32) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    for migration in MIGRATIONS
        .iter()
        .filter(|migration| migration.version > current_version)
    {
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()
}

fn current_user_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
}
