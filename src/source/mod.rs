//! Variable Group Sources
//!
//! Where the flat list of variable groups comes from: the Azure DevOps REST
//! API or a local JSON snapshot.

pub mod azure;
pub mod file;

use crate::error::SourceError;
use crate::record::VariableGroup;
use async_trait::async_trait;

pub use azure::AzureDevOpsSource;
pub use file::FileSource;

/// Source of variable groups, in the order the platform returns them.
#[async_trait]
pub trait VariableGroupSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<VariableGroup>, SourceError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}
