//! Logging initialization.
//!
//! One call at process startup wires up the tracing subscriber; repeated
//! calls are no-ops so binaries and test harnesses can both initialize
//! without coordinating.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Output profile for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, debug level for workspace crates.
    Development,
    /// JSON lines, info level for workspace crates.
    Production,
    /// No output; keeps test runs quiet.
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Default filter when `RUST_LOG` is unset.
fn default_filter(profile: Profile) -> EnvFilter {
    let directive = match profile {
        Profile::Development => "junction=debug",
        Profile::Production | Profile::Test => "junction=info",
    };
    EnvFilter::new(directive)
}

/// Initialize the logging facility for the given profile.
///
/// `RUST_LOG` overrides the profile's default filter. Only the first
/// call in a process takes effect.
///
/// # Example
///
/// ```
/// use junction_core::logging::{init, Profile};
///
/// init(Profile::Test);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(profile));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
            Profile::Production => {
                tracing_subscriber::fmt().json().with_env_filter(filter).init();
            }
            Profile::Test => {
                // Bare registry: events are dropped, nothing is printed.
                tracing_subscriber::registry().init();
            }
        }
    });
}
