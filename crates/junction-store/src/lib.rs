//! Junction Store - SQLite persistence for the tagging and currency domains
//!
//! Provides:
//! - Embedded SQL migrations with paired up/down scripts, applied
//!   idempotently and recorded in a checksummed ledger
//! - A repository layer for Posts/Tags and Currencies/Regions plus their
//!   junction tables
//! - Eager-loading lookups that hydrate a root row together with its
//!   related rows in one call
//! - Static schema descriptors with live-database verification

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
