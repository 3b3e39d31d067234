use crate::db::customers::TABLE_CUSTOMER;
use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "smtbiz.db";

/// Single integer schema version of the store.
///
/// Bumping this constant is a destructive operation: any database file
/// carrying a different version has its customer table dropped on open and
/// reseeded by the next schema check. There is no column-preserving
/// migration path; data loss on a version bump is intended behavior.
pub const DB_VERSION: i32 = 1;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        ensure_version(&mut conn)?;

        Ok(Db { conn })
    }
}

/// Reads the stored schema version (`PRAGMA user_version`).
pub fn get_db_version(conn: &Connection) -> Result<i32> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}

/// Applies the destructive upgrade policy.
///
/// A version mismatch takes one explicit branch: drop the customer table
/// and stamp the current version, leaving table recreation and reseeding
/// to the store's schema check. Version 0 (a fresh file) goes through the
/// same branch with nothing to drop.
fn ensure_version(conn: &mut Connection) -> Result<()> {
    let version = get_db_version(conn)?;
    if version == DB_VERSION {
        return Ok(());
    }
    if version != 0 {
        msg_debug!("Schema version {} found, expected {}: dropping table for reseed", version, DB_VERSION);
    }

    let tx = conn.transaction()?;
    tx.execute(&format!("DROP TABLE IF EXISTS {}", TABLE_CUSTOMER), [])?;
    tx.pragma_update(None, "user_version", DB_VERSION)?;
    tx.commit()?;

    Ok(())
}
