//! Versioned schema steps for the content database.
//!
//! # Invariants
//! - Steps are listed in strictly increasing version order.
//! - `PRAGMA user_version` holds the last applied step.
//! - An upgrade applies every pending step or none.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// One schema step: SQL to run to reach `version`.
struct SchemaStep {
    version: u32,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    sql: include_str!("0001_documents.sql"),
}];

/// Newest schema version this build can read and write.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Upgrades `conn` to [`latest_version`].
///
/// # Errors
/// - `SchemaTooNew` when the file was written by a newer build.
/// - `Migration` naming the failed step; nothing is applied in that case.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(DbError::Open)?;
    let supported = latest_version();
    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    let pending = pending_steps(found);
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction().map_err(DbError::Open)?;
    for step in &pending {
        tx.execute_batch(step.sql)
            .and_then(|()| tx.pragma_update(None, "user_version", step.version))
            .map_err(|source| DbError::Migration {
                version: step.version,
                source,
            })?;
    }
    tx.commit().map_err(|source| DbError::Migration {
        version: supported,
        source,
    })?;

    info!(
        "event=db_migrate module=db status=ok from_version={found} to_version={supported} steps={}",
        pending.len()
    );
    Ok(())
}

fn pending_steps(applied: u32) -> Vec<&'static SchemaStep> {
    SCHEMA_STEPS
        .iter()
        .filter(|step| step.version > applied)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{latest_version, pending_steps, SCHEMA_STEPS};

    #[test]
    fn steps_are_strictly_increasing() {
        assert!(SCHEMA_STEPS
            .windows(2)
            .all(|pair| pair[0].version < pair[1].version));
        assert_eq!(latest_version(), 1);
    }

    #[test]
    fn fresh_database_needs_every_step_and_current_needs_none() {
        assert_eq!(pending_steps(0).len(), SCHEMA_STEPS.len());
        assert!(pending_steps(latest_version()).is_empty());
    }
}
