//! Canonical error taxonomy for the workspace.
//!
//! Store operations classify SQLite failures into the variants below so
//! callers can react to the *kind* of violation without parsing driver
//! messages. Lookup misses are not errors; they surface as `Option::None`
//! or empty collections from the repository layer.

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, JunctionError>;

/// Errors surfaced by schema management and repository operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JunctionError {
    /// A unique index or primary key rejected a duplicate value.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A junction row referenced a parent that does not exist, or a
    /// parent delete was blocked by a referencing row.
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// A CHECK constraint rejected a value, e.g. an over-long country code.
    #[error("check constraint violated: {0}")]
    CheckViolation(String),

    /// A migration failed to apply or revert. The transaction for the
    /// failing step has been rolled back.
    #[error("migration {id} failed: {reason}")]
    Migration { id: String, reason: String },

    /// The SQL recorded for an applied migration no longer matches the
    /// embedded SQL. Somebody edited a migration after it shipped.
    #[error("checksum mismatch for migration {id}: ledger has {recorded}, embedded SQL hashes to {computed}")]
    ChecksumMismatch {
        id: String,
        recorded: String,
        computed: String,
    },

    /// The live database layout diverges from the expected schema.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Any other SQLite failure, carried as the driver's message.
    #[error("database error: {0}")]
    Sqlite(String),
}

impl JunctionError {
    /// True for the constraint-violation variants, which indicate bad
    /// input data rather than a broken store.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            JunctionError::UniqueViolation(_)
                | JunctionError::ForeignKeyViolation(_)
                | JunctionError::CheckViolation(_)
        )
    }
}
