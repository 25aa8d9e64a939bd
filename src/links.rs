//! URL construction for the Azure DevOps library.

use crate::types::GroupId;

/// Default REST API version for the variable groups endpoint.
pub const DEFAULT_API_VERSION: &str = "7.0";

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Organization URL derived from its short name, as the extension host does.
pub fn organization_url(organization: &str) -> String {
    format!("https://{}.visualstudio.com", organization.trim())
}

/// Detail page of a single variable group.
pub fn variable_group_url(base_url: &str, project: &str, id: &GroupId) -> String {
    format!(
        "{}/{}/_library?itemType=VariableGroups&view=VariableGroupView&variableGroupId={}",
        trim_base(base_url),
        project,
        id
    )
}

/// REST endpoint listing every variable group of a project.
pub fn variable_groups_api_url(base_url: &str, project: &str, api_version: &str) -> String {
    format!(
        "{}/{}/_apis/distributedtask/variablegroups?api-version={}",
        trim_base(base_url),
        project,
        api_version
    )
}
