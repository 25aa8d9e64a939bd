//! Built-in defaults, the lowest layer of every merge.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("organization.api_version", crate::links::DEFAULT_API_VERSION)?
        .set_default("organization.timeout_secs", 30)?
        .set_default("organization.auth_scheme", "basic")?
        .set_default("display.view", "hierarchy")?
        .set_default("display.color", true)?
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")
}
