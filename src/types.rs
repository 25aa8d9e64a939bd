//! Core types shared across the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default token delimiter for hierarchical group names.
pub const DELIMITER: char = '-';

/// GroupId: opaque identifier of a variable group (numeric on Azure DevOps)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupId {
    Number(i64),
    Text(String),
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupId::Number(n) => write!(f, "{}", n),
            GroupId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for GroupId {
    fn from(value: i64) -> Self {
        GroupId::Number(value)
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        GroupId::Text(value.to_string())
    }
}

impl GroupId {
    /// Parse a user-supplied id, preferring the numeric form.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => GroupId::Number(n),
            Err(_) => GroupId::Text(trimmed.to_string()),
        }
    }
}
