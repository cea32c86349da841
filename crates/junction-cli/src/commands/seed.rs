//! Seed command
//!
//! Usage: junction seed [--db PATH]
//!
//! Loads a small demonstration data set: tagged posts on one side,
//! currencies circulating in regions on the other. All UIDs are fixed
//! so repeated demos hit the same rows; the euro in particular keeps a
//! well-known UID that the lookup examples reference.

use clap::Args;
use junction_core::model::{Currency, PostTag, Region, RegionCurrency, Tag};
use junction_store::repo::{currencies, posts, regions, tags};
use std::path::PathBuf;
use uuid::Uuid;

use crate::commands::{open_store, resolve_db_path};

const EURO_UID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";
const DOLLAR_UID: &str = "4c9a0f2d-6a42-4f3b-9c58-0d2ad1b8a90f";
const FRANC_UID: &str = "7e3d1f5a-8b1c-4d70-b4a2-93f0c8e2a611";
const GERMANY_UID: &str = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";
const FRANCE_UID: &str = "6fa459ea-ee8a-4ca4-894e-db77e160355e";
const UNITED_STATES_UID: &str = "886313e1-3b8a-4372-9b90-0c9aee199e5d";

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Path to the SQLite database (falls back to JUNCTION_DB, then .junction/store.db)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = resolve_db_path(args.db);
    let mut conn = open_store(&db_path)?;

    junction_store::migrations::apply_migrations(&mut conn)?;

    let euro_uid = Uuid::parse_str(EURO_UID)?;
    if currencies::get_currency(&conn, euro_uid)?.is_some() {
        println!("Store at {} is already seeded", db_path.display());
        return Ok(());
    }

    // The whole fixture commits together; a failed run leaves no
    // partial rows behind to confuse the seeded check above.
    let tx = conn.transaction()?;

    // The "draft" tag stays unattached and the franc unlinked, so both
    // empty-collection lookups can be demonstrated.
    for tag in ["rust", "database", "draft"] {
        tags::insert_tag(&tx, &Tag::new(tag))?;
    }

    let joins = posts::insert_post(
        &tx,
        "Modeling many-to-many joins",
        "Two parents, one junction table.",
    )?;
    let keys = posts::insert_post(
        &tx,
        "Composite keys in practice",
        "The pair of foreign keys is the primary key.",
    )?;
    posts::tag_post(&tx, &PostTag::new(joins.post_id, "rust"))?;
    posts::tag_post(&tx, &PostTag::new(joins.post_id, "database"))?;
    posts::tag_post(&tx, &PostTag::new(keys.post_id, "database"))?;

    let euro = Currency::with_uid(euro_uid, Some("EUR".to_string()), Some("€".to_string()));
    let dollar = Currency::with_uid(
        Uuid::parse_str(DOLLAR_UID)?,
        Some("USD".to_string()),
        Some("$".to_string()),
    );
    let franc = Currency::with_uid(Uuid::parse_str(FRANC_UID)?, Some("CHF".to_string()), None);
    for currency in [&euro, &dollar, &franc] {
        currencies::insert_currency(&tx, currency)?;
    }

    let germany = Region::with_uid(Uuid::parse_str(GERMANY_UID)?, Some("DE".to_string()));
    let france = Region::with_uid(Uuid::parse_str(FRANCE_UID)?, Some("FR".to_string()));
    let united_states = Region::with_uid(
        Uuid::parse_str(UNITED_STATES_UID)?,
        Some("US".to_string()),
    );
    for region in [&germany, &france, &united_states] {
        regions::insert_region(&tx, region)?;
    }

    currencies::link_region(&tx, &RegionCurrency::new(euro.uid, germany.uid))?;
    currencies::link_region(&tx, &RegionCurrency::new(euro.uid, france.uid))?;
    currencies::link_region(&tx, &RegionCurrency::new(dollar.uid, united_states.uid))?;

    tx.commit()?;

    println!("✓ Seeded 2 posts, 3 tags, 3 post links");
    println!("✓ Seeded 3 currencies, 3 regions, 3 region links");
    println!("Try: junction lookup currency {}", EURO_UID);

    Ok(())
}
