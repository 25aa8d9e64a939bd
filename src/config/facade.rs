//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::VgtreeConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from files and environment.
    pub fn load(base_dir: &Path) -> Result<VgtreeConfig, ConfigError> {
        MergeService::load(base_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<VgtreeConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> VgtreeConfig {
        VgtreeConfig::default()
    }
}
