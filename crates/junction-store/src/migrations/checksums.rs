//! Checksum validation for migrations
//!
//! Hashes migration SQL so the ledger can detect scripts edited after
//! they were applied

use sha2::{Digest, Sha256};

/// Compute the SHA256 checksum of a migration script, hex encoded
pub fn compute_checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_64_hex_chars() {
        let checksum = compute_checksum("CREATE TABLE t (id INTEGER)");
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_checksum_tracks_content() {
        let a = compute_checksum("SELECT 1");
        let b = compute_checksum("SELECT 1");
        let c = compute_checksum("SELECT 2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
