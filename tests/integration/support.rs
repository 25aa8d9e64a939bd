use std::fs;
use std::path::{Path, PathBuf};

use vgtree::config::VgtreeConfig;
use vgtree::tooling::cli::CliContext;

/// Snapshot in the REST envelope shape, including a folder-and-record name.
pub const SNAPSHOT: &str = r#"{
  "count": 5,
  "value": [
    { "id": 1, "name": "app", "description": "Shared app settings" },
    { "id": 2, "name": "app-dev", "description": "Development",
      "variables": { "Region": { "value": "westeurope" } } },
    { "id": 3, "name": "app-prod", "description": "Production",
      "variables": { "Password": { "value": "hunter2", "isSecret": true } },
      "modifiedOn": "2024-01-05T10:20:30Z",
      "modifiedBy": { "displayName": "Ada", "id": "u-1" } },
    { "id": 4, "name": "db-prod", "description": "Database" },
    { "id": 5, "name": "app-prod", "description": "Duplicate" }
  ]
}"#;

pub fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("groups.json");
    fs::write(&path, SNAPSHOT).unwrap();
    path
}

/// Context over a snapshot with an explicit organization and no color.
pub fn snapshot_context(dir: &Path) -> CliContext {
    let mut config = VgtreeConfig::default();
    config.organization.url = Some("https://dev.azure.com/contoso".to_string());
    config.organization.project = Some("web".to_string());
    config.display.color = false;
    CliContext::with_config(config, Some(write_snapshot(dir)))
}
