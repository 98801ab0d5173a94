//! Global subscriber setup
//!
//! An editor applies `EditorConfig::log_profile` when it is built, so a
//! host normally selects a profile through configuration and never calls
//! [`init`] itself.

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use crate::errors::CanvexError;

/// Where canvex logs go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Text lines, command internals included
    Development,
    /// JSON lines, command boundaries only
    Production,
    /// In-memory capture, see [`super::test_capture`]
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is not set
    pub fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "canvex=debug",
            Profile::Production | Profile::Test => "canvex=info",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

impl FromStr for Profile {
    type Err = CanvexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Profile::Development),
            "production" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(CanvexError::InvalidConfig {
                reason: format!("unknown log profile '{}'", other),
            }),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the process-wide subscriber for `profile`
///
/// Only the first call has an effect, whatever profile later calls pass.
/// A subscriber the host installed beforehand is left in place.
///
/// # Example
///
/// ```
/// use canvex_core::logging_facility::{init, Profile};
/// use canvex_core::{Editor, EditorConfig};
///
/// init(Profile::Test);
/// // later editors find the subscriber already installed
/// let editor = Editor::new(EditorConfig {
///     log_profile: Some("production".to_string()),
///     ..EditorConfig::default()
/// })
/// .unwrap();
/// assert!(editor.store().is_empty());
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(profile.filter())
                .finish()
                .try_init()
                .is_ok(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(profile.filter())
                .finish()
                .try_init()
                .is_ok(),
            Profile::Test => {
                super::test_capture::init_test_capture();
                true
            }
        };
        if !installed {
            tracing::debug!(profile = ?profile, "subscriber already installed");
        }
    });
}
