use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// RegionCurrency - one edge in the many-to-many relation between
/// currencies and regions
///
/// The pair `(currency_uid, region_uid)` is the composite primary key,
/// in that column order, matching the `PK_RegionCurrency` constraint.
/// Both sides cascade on delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCurrency {
    pub currency_uid: Uuid,
    pub region_uid: Uuid,
}

impl RegionCurrency {
    /// Create an edge linking the given currency and region
    pub fn new(currency_uid: Uuid, region_uid: Uuid) -> Self {
        Self {
            currency_uid,
            region_uid,
        }
    }
}
