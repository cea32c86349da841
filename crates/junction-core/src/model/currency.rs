use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::region::Region;

/// Currency - a unit of money, keyed by a UUID assigned at creation
///
/// `iso_code` and `symbol` are both optional, but when an ISO code is
/// present it must be unique across the store (enforced by the
/// `UX_Currency_ISOCode` index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Stable identifier, supplied at creation and never changed
    pub uid: Uuid,

    /// ISO 4217 code such as "EUR" (optional, unique when present)
    pub iso_code: Option<String>,

    /// Display symbol such as "€" (optional)
    pub symbol: Option<String>,
}

impl Currency {
    /// Create a currency with a freshly generated UUID
    pub fn new(iso_code: Option<String>, symbol: Option<String>) -> Self {
        Self::with_uid(Uuid::new_v4(), iso_code, symbol)
    }

    /// Create a currency with a caller-chosen UUID
    ///
    /// Used when the identifier is fixed up front, e.g. by seed data.
    pub fn with_uid(uid: Uuid, iso_code: Option<String>, symbol: Option<String>) -> Self {
        Self {
            uid,
            iso_code,
            symbol,
        }
    }
}

/// A currency together with every region it circulates in, loaded in
/// one lookup.
///
/// `regions` is empty (not absent) when the currency exists but no
/// region links to it. Regions are ordered by ascending UID text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyWithRegions {
    pub currency: Currency,
    pub regions: Vec<Region>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_distinct_uids() {
        let a = Currency::new(Some("EUR".to_string()), Some("€".to_string()));
        let b = Currency::new(Some("USD".to_string()), Some("$".to_string()));
        assert_ne!(a.uid, b.uid);
    }

    #[test]
    fn test_with_uid_keeps_the_given_uid() {
        let uid = Uuid::parse_str("0f8fad5b-d9cb-469f-a165-70867728950e").unwrap();
        let currency = Currency::with_uid(uid, Some("EUR".to_string()), None);
        assert_eq!(currency.uid, uid);
        assert_eq!(currency.symbol, None);
    }
}
