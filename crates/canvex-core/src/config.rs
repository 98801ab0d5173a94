//! Editor configuration
//!
//! Every field has a default, so an empty document is a valid
//! configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CanvexError, Result};
use crate::logging_facility::Profile;
use crate::ops::factory::DEFAULT_FIRST_UID;

/// Ordering policy installed by [`Editor::new`](crate::editor::Editor::new)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingMode {
    /// [`LevelOrderingProvider`](crate::ordering::LevelOrderingProvider)
    #[default]
    Level,
    /// No ordering hooks; commands place elements where asked
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Keep labels attached to their targets during moves
    pub label_support: bool,

    /// Group name identifying the tool selection affordance
    pub toolbar_group: String,

    /// First sequence number of generated element ids
    pub first_uid: u64,

    pub ordering: OrderingMode,

    /// Logging profile: development, production or test
    ///
    /// Applied once per process by the first editor built with a profile.
    pub log_profile: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            label_support: true,
            toolbar_group: "tools".to_string(),
            first_uid: DEFAULT_FIRST_UID,
            ordering: OrderingMode::Level,
            log_profile: None,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from YAML
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` - malformed YAML, unknown fields or values, or an
    ///   unknown log profile
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: EditorConfig = if content.trim().is_empty() {
            EditorConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| CanvexError::InvalidConfig {
                reason: format!("YAML parse error: {}", e),
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML configuration file
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` - the file cannot be read or does not parse
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CanvexError::InvalidConfig {
            reason: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parsed logging profile, if one is configured
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` - unknown profile name
    pub fn profile(&self) -> Result<Option<Profile>> {
        self.log_profile.as_deref().map(str::parse::<Profile>).transpose()
    }

    fn validate(&self) -> Result<()> {
        if self.toolbar_group.is_empty() {
            return Err(CanvexError::InvalidConfig {
                reason: "toolbar_group must not be empty".to_string(),
            });
        }
        self.profile()?;
        Ok(())
    }
}
