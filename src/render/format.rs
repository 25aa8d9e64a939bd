//! Format hierarchies, lists, and group details as text or JSON.

use crate::error::ApiError;
use crate::expansion::ExpansionState;
use crate::record::VariableGroup;
use crate::tree::{walk_where, TreeNode};
use crate::views::Summary;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

pub const EMPTY_PROJECT_MESSAGE: &str = "No variable groups found in this project.";

const TABLE_HEADER: [&str; 5] = [
    "Name",
    "Date modified",
    "Modified by",
    "Description",
    "Variables",
];

const SECRET_MASK: &str = "********";

/// Format a section heading with bold/underline when color is on.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// `2024-01-05T10:20:30Z` -> `Jan 5, 2024`; unparseable values are returned as-is.
pub fn format_modified_date(modified_on: Option<&str>) -> String {
    match modified_on {
        None => String::new(),
        Some(raw) => match chrono::DateTime::parse_from_rfc3339(raw) {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => raw.to_string(),
        },
    }
}

fn group_columns(group: &VariableGroup) -> [String; 4] {
    [
        format_modified_date(group.modified_on.as_deref()),
        group.modified_by_name().to_string(),
        group.description.clone(),
        group.variable_count().to_string(),
    ]
}

fn header(out: &mut String, summary: &Summary, color: bool) {
    out.push_str(&format!(
        "{}\n",
        format_section_heading("Library - Variable Groups", color)
    ));
    out.push_str(&format!("{}\n\n", summary));
}

/// Format the hierarchy as an indented table. Only expanded folders show
/// their children.
pub fn format_tree_text(
    root: &TreeNode<'_, VariableGroup>,
    expansion: &ExpansionState,
    summary: &Summary,
    color: bool,
) -> String {
    let mut out = String::new();
    if summary.total == 0 {
        out.push_str(EMPTY_PROJECT_MESSAGE);
        out.push('\n');
        return out;
    }
    header(&mut out, summary, color);
    if root.is_empty() {
        out.push_str("No variable groups match the search.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(TABLE_HEADER.to_vec());

    let descend = |node: &TreeNode<'_, VariableGroup>| expansion.is_expanded(&node.path);
    for visit in walk_where(root, &descend) {
        let node = visit.node;
        let indent = "  ".repeat(visit.depth);
        let chevron = if !node.has_children() {
            "  "
        } else if expansion.is_expanded(&node.path) {
            "▼ "
        } else {
            "▶ "
        };

        let mut name = format!("{}{}{}", indent, chevron, node.name);
        match node.record {
            Some(group) => {
                let [date, modified_by, description, variables] = group_columns(group);
                table.add_row(vec![name, date, modified_by, description, variables]);
            }
            None => {
                if color {
                    name = format!("{}{}{}", indent, chevron, node.name.bold());
                }
                if node.has_children() {
                    name.push_str(&format!(" ({})", node.children.len()));
                }
                table.add_row(vec![name, String::new(), String::new(), String::new(), String::new()]);
            }
        }
    }

    out.push_str(&format!("{}\n", table));
    out
}

/// Format groups as a flat table; callers pass them already sorted.
pub fn format_list_text(groups: &[&VariableGroup], summary: &Summary, color: bool) -> String {
    let mut out = String::new();
    if summary.total == 0 {
        out.push_str(EMPTY_PROJECT_MESSAGE);
        out.push('\n');
        return out;
    }
    header(&mut out, summary, color);
    if groups.is_empty() {
        out.push_str("No variable groups match the search.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(TABLE_HEADER.to_vec());
    for group in groups {
        let [date, modified_by, description, variables] = group_columns(group);
        table.add_row(vec![group.name.clone(), date, modified_by, description, variables]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

#[derive(Serialize)]
struct TreeOutput<'n, 'a> {
    summary: Summary,
    tree: Vec<&'n TreeNode<'a, VariableGroup>>,
}

#[derive(Serialize)]
struct ListOutput<'n> {
    summary: Summary,
    groups: &'n [&'n VariableGroup],
}

/// Tree as JSON: top-level nodes with nested `children`.
pub fn format_tree_json(
    root: &TreeNode<'_, VariableGroup>,
    summary: &Summary,
) -> Result<String, ApiError> {
    let output = TreeOutput {
        summary: *summary,
        tree: root.children().collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn format_list_json(groups: &[&VariableGroup], summary: &Summary) -> Result<String, ApiError> {
    let output = ListOutput {
        summary: *summary,
        groups,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

fn variable_value(group: &VariableGroup, name: &str, value: &serde_json::Value) -> String {
    if group.is_secret(name) {
        return SECRET_MASK.to_string();
    }
    match value.get("value") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Format one group with its variables; secret values are masked.
pub fn format_group_detail_text(group: &VariableGroup, url: Option<&str>, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(&group.name, color)));
    out.push_str(&format!("  Id: {}\n", group.id));
    if !group.description.is_empty() {
        out.push_str(&format!("  Description: {}\n", group.description));
    }
    if !group.group_type.is_empty() {
        out.push_str(&format!("  Type: {}\n", group.group_type));
    }
    let modified = format_modified_date(group.modified_on.as_deref());
    if !modified.is_empty() {
        out.push_str(&format!("  Modified: {}", modified));
        if !group.modified_by_name().is_empty() {
            out.push_str(&format!(" by {}", group.modified_by_name()));
        }
        out.push('\n');
    }
    if let Some(url) = url {
        out.push_str(&format!("  URL: {}\n", url));
    }
    out.push('\n');

    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Variables ({})", group.variable_count()), color)
    ));
    if group.variables.is_empty() {
        out.push_str("No variables.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Variable", "Value"]);
    for (name, value) in &group.variables {
        table.add_row(vec![name.clone(), variable_value(group, name, value)]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

#[derive(Serialize)]
struct DetailOutput<'g> {
    #[serde(flatten)]
    group: &'g VariableGroup,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'g str>,
}

/// Group as JSON; secret variable values are replaced by the mask.
pub fn format_group_detail_json(group: &VariableGroup, url: Option<&str>) -> Result<String, ApiError> {
    let mut masked = group.clone();
    for (name, value) in masked.variables.iter_mut() {
        if group.is_secret(name) {
            if let Some(object) = value.as_object_mut() {
                object.insert(
                    "value".to_string(),
                    serde_json::Value::String(SECRET_MASK.to_string()),
                );
            }
        }
    }
    let output = DetailOutput {
        group: &masked,
        url,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
