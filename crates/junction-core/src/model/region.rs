use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest country code the store accepts, enforced by a CHECK
/// constraint on the `Regions` table.
pub const COUNTRY_ISO_CODE_MAX_LEN: usize = 8;

/// Region - a geographic area, keyed by a UUID assigned at creation
///
/// `country_iso_code` is optional, at most [`COUNTRY_ISO_CODE_MAX_LEN`]
/// characters, and unique when present (enforced by the
/// `UX_Region_CountryISOCode` index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Stable identifier, supplied at creation and never changed
    pub uid: Uuid,

    /// ISO 3166 country code such as "DE" (optional, unique when present)
    pub country_iso_code: Option<String>,
}

impl Region {
    /// Create a region with a freshly generated UUID
    pub fn new(country_iso_code: Option<String>) -> Self {
        Self::with_uid(Uuid::new_v4(), country_iso_code)
    }

    /// Create a region with a caller-chosen UUID
    pub fn with_uid(uid: Uuid, country_iso_code: Option<String>) -> Self {
        Self {
            uid,
            country_iso_code,
        }
    }
}
