//! Junction Core - shared domain models and facilities
//!
//! This crate defines the domain vocabulary used across the workspace:
//!
//! - **Models**: `Post`/`Tag` joined through `PostTag`, and
//!   `Currency`/`Region` joined through `RegionCurrency`, plus the
//!   hydrated read models returned by eager-loading lookups.
//! - **Errors**: the canonical [`JunctionError`] taxonomy that store
//!   operations surface.
//! - **Logging**: a single initialization point for the tracing
//!   subscriber, shared by binaries and tests.

pub mod errors;
pub mod logging;
pub mod model;

pub use errors::{JunctionError, Result};
pub use model::{
    Currency, CurrencyWithRegions, Post, PostTag, Region, RegionCurrency, Tag, TagWithPosts,
};
