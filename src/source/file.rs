//! Local JSON snapshot source.

use crate::error::SourceError;
use crate::record::{VariableGroup, VariableGroupList};
use crate::source::VariableGroupSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Accepts a bare array or the REST `{ "value": [...] }` envelope.
    pub fn parse(content: &str) -> Result<Vec<VariableGroup>, SourceError> {
        let decode = |e: serde_json::Error| SourceError::Decode(e.to_string());
        let value: serde_json::Value = serde_json::from_str(content).map_err(decode)?;
        match value {
            serde_json::Value::Array(_) => serde_json::from_value(value).map_err(decode),
            serde_json::Value::Object(_) => {
                let list: VariableGroupList = serde_json::from_value(value).map_err(decode)?;
                Ok(list.value)
            }
            _ => Err(SourceError::Decode(
                "snapshot must be an array of variable groups or a { \"value\": [...] } envelope"
                    .to_string(),
            )),
        }
    }

    pub fn load(&self) -> Result<Vec<VariableGroup>, SourceError> {
        let content = std::fs::read_to_string(&self.path)?;
        Self::parse(&content)
    }
}

#[async_trait]
impl VariableGroupSource for FileSource {
    async fn fetch(&self) -> Result<Vec<VariableGroup>, SourceError> {
        self.load()
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
