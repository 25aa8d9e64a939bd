//! Configuration
//!
//! Layered configuration for vgtree: built-in defaults, the global XDG config
//! file, a local `vgtree.toml`, then `VGTREE__*` environment variables.

pub mod facade;
pub mod merge;
pub mod organization;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use organization::{AuthScheme, OrganizationConfig};
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use crate::views::ViewMode;
use serde::{Deserialize, Serialize};

/// Display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// View used by `vgtree view`: hierarchy or list
    #[serde(default)]
    pub view: ViewMode,

    /// Bold/underlined headings and folder names
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            view: ViewMode::default(),
            color: default_true(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VgtreeConfig {
    #[serde(default)]
    pub organization: OrganizationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}
