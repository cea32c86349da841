//! Repository layer for the tagging and currency domains
//!
//! Free functions over a borrowed connection, one module per root
//! entity. Junction rows are written through the owning side's module
//! and read back through [`hydration`].

pub mod currencies;
pub mod hydration;
pub mod posts;
pub mod regions;
pub mod tags;

/// Parse a UUID read from a TEXT column, surfacing bad data as a
/// column conversion failure at the given index.
pub(crate) fn uuid_column(idx: usize, text: String) -> rusqlite::Result<uuid::Uuid> {
    uuid::Uuid::parse_str(&text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
