//! Error handling for junction-store
//!
//! Maps rusqlite failures onto the junction-core taxonomy and provides
//! store-specific constructors.

pub use junction_core::errors::{JunctionError, Result};

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> JunctionError {
    JunctionError::Migration {
        id: migration_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, recorded: &str, computed: &str) -> JunctionError {
    JunctionError::ChecksumMismatch {
        id: migration_id.to_string(),
        recorded: recorded.to_string(),
        computed: computed.to_string(),
    }
}

/// Classify a rusqlite error into the store taxonomy
///
/// Constraint failures are split by SQLite extended result code so
/// callers can tell unique, foreign key, and check violations apart
/// without parsing driver messages. Everything else is carried as a
/// plain database error.
pub fn from_rusqlite(err: rusqlite::Error) -> JunctionError {
    match err {
        rusqlite::Error::SqliteFailure(e, msg) => {
            let detail = msg.unwrap_or_else(|| e.to_string());
            match e.extended_code {
                rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    JunctionError::UniqueViolation(detail)
                }
                rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    JunctionError::ForeignKeyViolation(detail)
                }
                rusqlite::ffi::SQLITE_CONSTRAINT_CHECK => JunctionError::CheckViolation(detail),
                _ => JunctionError::Sqlite(detail),
            }
        }
        other => JunctionError::Sqlite(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(extended_code: i32, msg: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(extended_code),
            Some(msg.to_string()),
        )
    }

    #[test]
    fn test_unique_codes_classify_as_unique_violation() {
        let err = sqlite_failure(
            rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
            "UNIQUE constraint failed: Currecies.ISOCode",
        );
        assert!(matches!(
            from_rusqlite(err),
            JunctionError::UniqueViolation(_)
        ));

        let err = sqlite_failure(
            rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY,
            "UNIQUE constraint failed: PostTag.PostId, PostTag.TagId",
        );
        assert!(matches!(
            from_rusqlite(err),
            JunctionError::UniqueViolation(_)
        ));
    }

    #[test]
    fn test_foreign_key_code_classifies() {
        let err = sqlite_failure(
            rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            "FOREIGN KEY constraint failed",
        );
        assert!(matches!(
            from_rusqlite(err),
            JunctionError::ForeignKeyViolation(_)
        ));
    }

    #[test]
    fn test_check_code_classifies() {
        let err = sqlite_failure(
            rusqlite::ffi::SQLITE_CONSTRAINT_CHECK,
            "CHECK constraint failed: CK_Region_CountryISOCode_Length",
        );
        assert!(matches!(from_rusqlite(err), JunctionError::CheckViolation(_)));
    }

    #[test]
    fn test_other_errors_fall_through() {
        let err = rusqlite::Error::QueryReturnedNoRows;
        assert!(matches!(from_rusqlite(err), JunctionError::Sqlite(_)));
    }
}
