//! Organization and project settings for the Azure DevOps source.

use crate::error::ApiError;
use crate::links::{self, DEFAULT_API_VERSION};
use serde::{Deserialize, Serialize};

/// Environment variables consulted for a token, in order.
pub const TOKEN_ENV_VARS: [&str; 3] = ["VGTREE_TOKEN", "AZURE_DEVOPS_EXT_PAT", "SYSTEM_ACCESSTOKEN"];

/// How the token is presented to the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>` (OAuth / extension host tokens)
    Bearer,
    /// HTTP basic with an empty user and a personal access token
    #[default]
    Basic,
}

/// Azure DevOps organization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationConfig {
    /// Full organization URL, e.g. `https://dev.azure.com/contoso`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Short organization name; expands to `https://<name>.visualstudio.com`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Project whose library is listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Token; falls back to the environment when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default)]
    pub auth_scheme: AuthScheme,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: None,
            project: None,
            token: None,
            auth_scheme: AuthScheme::default(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OrganizationConfig {
    fn url_has_scheme(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }

    /// Scheme present and a non-empty host without whitespace.
    pub fn url_is_valid(url: &str) -> bool {
        if !Self::url_has_scheme(url) {
            return false;
        }
        let Some(rest) = url.split_once("://").map(|(_, rest)| rest) else {
            return false;
        };
        if rest.chars().any(char::is_whitespace) {
            return false;
        }
        let authority = rest.split('/').next().unwrap_or_default();
        let host_port = authority.rsplit('@').next().unwrap_or(authority);
        let host = host_port.split(':').next().unwrap_or_default();
        !host.is_empty()
    }

    /// Base URL: explicit `url` wins over the derived `name` form.
    pub fn base_url(&self) -> Result<String, ApiError> {
        let url = match (&self.url, &self.name) {
            (Some(url), _) if !url.trim().is_empty() => url.trim().to_string(),
            (_, Some(name)) if !name.trim().is_empty() => links::organization_url(name),
            _ => {
                return Err(ApiError::ConfigError(
                    "Organization not configured (set organization.url or organization.name)"
                        .to_string(),
                ))
            }
        };
        if !Self::url_is_valid(&url) {
            return Err(ApiError::ConfigError(format!(
                "Invalid organization URL: {}",
                url
            )));
        }
        Ok(url)
    }

    pub fn project_name(&self) -> Result<&str, ApiError> {
        self.project
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                ApiError::ConfigError("Project not configured (set organization.project)".to_string())
            })
    }

    /// Token from config, then the first non-empty token environment variable.
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| {
                TOKEN_ENV_VARS
                    .iter()
                    .filter_map(|var| std::env::var(var).ok())
                    .find(|value| !value.is_empty())
            })
    }

    /// Validate everything needed to reach the REST API.
    pub fn validate(&self) -> Result<(), String> {
        self.base_url().map_err(|e| e.to_string())?;
        self.project_name().map_err(|e| e.to_string())?;
        if self.api_version.trim().is_empty() {
            return Err("api_version cannot be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be positive".to_string());
        }
        Ok(())
    }
}
