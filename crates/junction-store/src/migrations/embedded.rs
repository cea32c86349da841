//! Embedded SQL migrations
//!
//! Migration scripts are embedded at compile time using include_str!
//! Every migration carries both directions: `up_sql` creates the
//! schema step, `down_sql` undoes exactly that step.

/// Migration metadata with paired scripts
pub struct Migration {
    pub id: &'static str,
    pub up_sql: &'static str,
    pub down_sql: &'static str,
}

/// Get all embedded migrations in application order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_tagging_schema",
            up_sql: include_str!("../../migrations/001_tagging_schema.up.sql"),
            down_sql: include_str!("../../migrations/001_tagging_schema.down.sql"),
        },
        Migration {
            id: "002_currency_region_schema",
            up_sql: include_str!("../../migrations/002_currency_region_schema.up.sql"),
            down_sql: include_str!("../../migrations/002_currency_region_schema.down.sql"),
        },
    ]
}
