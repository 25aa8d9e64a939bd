//! Group Views
//!
//! Search filtering, list ordering, and view selection over the flat list of
//! variable groups. The hierarchy is rebuilt from whatever subset a view
//! selects.

use crate::record::VariableGroup;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How groups are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Hierarchy,
    List,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hierarchy" | "tree" => Ok(ViewMode::Hierarchy),
            "list" => Ok(ViewMode::List),
            other => Err(format!(
                "Invalid view mode: {} (must be 'hierarchy' or 'list')",
                other
            )),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Hierarchy => f.write_str("hierarchy"),
            ViewMode::List => f.write_str("list"),
        }
    }
}

/// Case-insensitive substring search over name and description.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    /// A blank or whitespace-only query matches everything.
    pub fn new(raw: Option<&str>) -> Self {
        let needle = raw
            .filter(|q| !q.trim().is_empty())
            .map(|q| q.to_lowercase());
        Self { needle }
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    pub fn matches(&self, group: &VariableGroup) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => {
                group.name.to_lowercase().contains(needle.as_str())
                    || group.description.to_lowercase().contains(needle.as_str())
            }
        }
    }

    /// Matching groups in their original order.
    pub fn filter<'a>(&self, groups: &'a [VariableGroup]) -> Vec<&'a VariableGroup> {
        groups.iter().filter(|g| self.matches(g)).collect()
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Order groups by name for the list view.
pub fn sort_by_name(groups: &mut [&VariableGroup]) {
    groups.sort_by(|a, b| compare_names(&a.name, &b.name));
}

/// Header counts: how many groups are shown out of how many were loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub shown: usize,
    pub total: usize,
    pub filtered: bool,
}

impl Summary {
    pub fn new(shown: usize, total: usize, query: &SearchQuery) -> Self {
        Self {
            shown,
            total,
            filtered: query.is_active() && shown != total,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.total == 1 { "" } else { "s" };
        write!(
            f,
            "{} of {} variable group{}",
            self.shown, self.total, plural
        )?;
        if self.filtered {
            f.write_str(" (filtered)")?;
        }
        Ok(())
    }
}
