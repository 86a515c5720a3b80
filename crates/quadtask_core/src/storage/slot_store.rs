//! Named-slot snapshot store over SQLite.
//!
//! # Responsibility
//! - Persist the whole task collection as one JSON payload per slot.
//! - Distinguish an absent slot, a malformed payload, and database faults.
//!
//! # Invariants
//! - `load` reports an absent slot as `Ok(None)`, never as an error.
//! - `save` replaces the slot payload in one statement.
//! - Construction validates the migrated schema before first use.

use std::error::Error;
use std::fmt::{Display, Formatter};

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::task::Task;

/// Slot the session's task collection persists under.
pub const TASKS_SLOT: &str = "tasks";

/// Result type used by snapshot store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from snapshot persistence operations.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// The slot payload could not be decoded as a task array, or the
    /// collection could not be encoded into one.
    Malformed(serde_json::Error),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed snapshot payload: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "snapshot store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "snapshot store requires table `{table}`")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

/// Save/load contract for whole-collection snapshots.
///
/// The collection always persists as one unit; partial writes cannot
/// express a consistent board.
pub trait SnapshotStore {
    /// Loads the stored collection; `Ok(None)` when the slot is absent.
    fn load(&self) -> StorageResult<Option<Vec<Task>>>;
    /// Replaces the stored collection with `tasks`.
    fn save(&self, tasks: &[Task]) -> StorageResult<()>;
    /// Removes the slot entirely, as if nothing was ever saved.
    fn clear(&self) -> StorageResult<()>;
}

/// SQLite-backed named-slot store.
#[derive(Debug)]
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
    slot: String,
}

impl<'conn> SqliteSlotStore<'conn> {
    /// Creates a store over the session slot [`TASKS_SLOT`].
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        Self::with_slot(conn, TASKS_SLOT)
    }

    /// Creates a store over a caller-chosen slot name.
    pub fn with_slot(conn: &'conn Connection, slot: impl Into<String>) -> StorageResult<Self> {
        ensure_slot_connection_ready(conn)?;
        Ok(Self {
            conn,
            slot: slot.into(),
        })
    }
}

impl SnapshotStore for SqliteSlotStore<'_> {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM snapshot_slots WHERE slot = ?1;",
                [self.slot.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let payload = serde_json::to_string(tasks)?;
        self.conn.execute(
            "INSERT INTO snapshot_slots (slot, payload, updated_at)
             VALUES (?1, ?2, CAST(strftime('%s', 'now') AS INTEGER) * 1000)
             ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![self.slot.as_str(), payload],
        )?;
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.conn.execute(
            "DELETE FROM snapshot_slots WHERE slot = ?1;",
            [self.slot.as_str()],
        )?;
        Ok(())
    }
}

fn ensure_slot_connection_ready(conn: &Connection) -> StorageResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StorageError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "snapshot_slots")? {
        return Err(StorageError::MissingRequiredTable("snapshot_slots"));
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StorageResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
