//! Azure DevOps REST source.

use crate::config::organization::TOKEN_ENV_VARS;
use crate::config::{AuthScheme, OrganizationConfig};
use crate::error::{ApiError, SourceError};
use crate::links;
use crate::record::{VariableGroup, VariableGroupList};
use crate::source::VariableGroupSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Lists the variable groups of one project.
pub struct AzureDevOpsSource {
    client: Client,
    endpoint: String,
    token: Option<String>,
    auth_scheme: AuthScheme,
}

impl AzureDevOpsSource {
    pub fn new(
        endpoint: String,
        token: Option<String>,
        auth_scheme: AuthScheme,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            token,
            auth_scheme,
        })
    }

    /// Build from validated organization settings.
    pub fn from_config(config: &OrganizationConfig) -> Result<Self, ApiError> {
        config.validate().map_err(ApiError::ConfigError)?;
        let base_url = config.base_url()?;
        let project = config.project_name()?;
        let endpoint = links::variable_groups_api_url(&base_url, project, &config.api_version);
        let source = Self::new(
            endpoint,
            config.resolve_token(),
            config.auth_scheme,
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(source)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Where a token can come from, in lookup order.
fn credential_hint() -> String {
    format!("set organization.token or one of {}", TOKEN_ENV_VARS.join(", "))
}

#[async_trait]
impl VariableGroupSource for AzureDevOpsSource {
    async fn fetch(&self) -> Result<Vec<VariableGroup>, SourceError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| SourceError::MissingCredentials(credential_hint()))?;

        let request = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json");
        let request = match self.auth_scheme {
            AuthScheme::Bearer => request.bearer_auth(token),
            AuthScheme::Basic => request.basic_auth("", Some(token)),
        };

        tracing::debug!(endpoint = %self.endpoint, "Fetching variable groups");
        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("").to_string();
            tracing::error!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "Variable group request failed"
            );
            return Err(SourceError::Status {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response.text().await?;
        let list: VariableGroupList =
            serde_json::from_str(&body).map_err(|e| SourceError::Decode(e.to_string()))?;

        tracing::info!(
            count = list.value.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched variable groups"
        );
        Ok(list.value)
    }

    fn describe(&self) -> String {
        format!("azure devops {}", self.endpoint)
    }
}
