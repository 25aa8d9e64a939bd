//! Variable group records as returned by the Azure DevOps REST API.

use crate::tree::Named;
use crate::types::GroupId;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identity of the last editor of a variable group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

/// A variable group: one flat record of the library.
///
/// Only `id` and `name` are required. Everything else is payload carried
/// through to rendering untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableGroup {
    pub id: GroupId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub group_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables: IndexMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<IdentityRef>,
}

impl VariableGroup {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            group_type: String::new(),
            variables: IndexMap::new(),
            modified_on: None,
            modified_by: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn modified_by_name(&self) -> &str {
        self.modified_by
            .as_ref()
            .map(|m| m.display_name.as_str())
            .unwrap_or("")
    }

    /// Whether a variable is flagged `isSecret` by the platform.
    pub fn is_secret(&self, variable: &str) -> bool {
        self.variables
            .get(variable)
            .and_then(|v| v.get("isSecret"))
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}

impl Named for VariableGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

/// REST list envelope: `{ "count": n, "value": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariableGroupList {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Vec<VariableGroup>,
}
