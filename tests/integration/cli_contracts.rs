use std::fs;

use clap::Parser;
use tempfile::TempDir;
use vgtree::config::VgtreeConfig;
use vgtree::error::ApiError;
use vgtree::source::FileSource;
use vgtree::tooling::cli::{Cli, CliContext, Commands};

use crate::integration::support::snapshot_context;

fn tree(search: Option<&str>, format: &str) -> Commands {
    Commands::Tree {
        search: search.map(str::to_string),
        format: format.to_string(),
        expand: Vec::new(),
        collapsed: false,
    }
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["vgtree", "tree"],
        vec!["vgtree", "tree", "--search", "prod", "--format", "json"],
        vec!["vgtree", "tree", "--expand", "app", "--expand", "db"],
        vec!["vgtree", "tree", "--collapsed"],
        vec!["vgtree", "list", "--format", "json"],
        vec!["vgtree", "view", "--mode", "list"],
        vec!["vgtree", "show", "app-prod"],
        vec!["vgtree", "url", "--id", "42"],
        vec!["vgtree", "url", "--name", "app-prod"],
        vec!["vgtree", "fetch", "--output", "groups.json"],
        vec!["vgtree", "--input", "groups.json", "--verbose", "tree"],
        vec!["vgtree", "list", "--config", "custom.toml", "--log-level", "info"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_invalid_combinations() {
    assert!(Cli::try_parse_from(["vgtree", "url"]).is_err());
    assert!(Cli::try_parse_from(["vgtree", "url", "--id", "1", "--name", "x"]).is_err());
    assert!(
        Cli::try_parse_from(["vgtree", "tree", "--collapsed", "--expand", "app"]).is_err()
    );
}

#[test]
fn tree_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let cli = snapshot_context(temp_dir.path());

    let output = cli.execute(&tree(None, "json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["shown"], 5);
    assert_eq!(parsed["summary"]["total"], 5);
    assert_eq!(parsed["summary"]["filtered"], false);

    let top = parsed["tree"].as_array().expect("tree array should exist");
    let paths: Vec<&str> = top.iter().map(|n| n["path"].as_str().unwrap()).collect();
    assert_eq!(paths, vec!["app", "db"]);

    let app = &top[0];
    assert_eq!(app["kind"], "folder");
    let children = app["children"].as_array().unwrap();
    let child_paths: Vec<&str> = children.iter().map(|n| n["path"].as_str().unwrap()).collect();
    assert_eq!(child_paths, vec!["app", "app-dev", "app-prod"]);
    assert_eq!(children[0]["record"]["id"], 1);
    // duplicate app-prod keeps the first record
    assert_eq!(children[2]["record"]["id"], 3);
}

#[test]
fn search_rebuilds_tree_from_subset() {
    let temp_dir = TempDir::new().unwrap();
    let cli = snapshot_context(temp_dir.path());

    let output = cli.execute(&tree(Some("PROD"), "json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["shown"], 3);
    assert_eq!(parsed["summary"]["filtered"], true);
    let app = &parsed["tree"][0];
    assert_eq!(app["path"], "app");
    let children = app["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["path"], "app-prod");
    assert_eq!(parsed["tree"][1]["path"], "db");
}

#[test]
fn tree_text_respects_expansion() {
    let temp_dir = TempDir::new().unwrap();
    let cli = snapshot_context(temp_dir.path());

    let collapsed = cli
        .execute(&Commands::Tree {
            search: None,
            format: "text".to_string(),
            expand: Vec::new(),
            collapsed: true,
        })
        .unwrap();
    assert!(collapsed.contains("▶ app (3)"));
    assert!(!collapsed.contains("dev"));

    let partial = cli
        .execute(&Commands::Tree {
            search: None,
            format: "text".to_string(),
            expand: vec!["app".to_string()],
            collapsed: false,
        })
        .unwrap();
    assert!(partial.contains("▼ app (3)"));
    assert!(partial.contains("dev"));
    assert!(partial.contains("▶ db (1)"));
    assert!(partial.contains("5 of 5 variable groups"));
}

#[test]
fn list_json_is_sorted_by_name() {
    let temp_dir = TempDir::new().unwrap();
    let cli = snapshot_context(temp_dir.path());

    let output = cli
        .execute(&Commands::List {
            search: None,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let names: Vec<&str> = parsed["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["app", "app-dev", "app-prod", "app-prod", "db-prod"]);
}

#[test]
fn url_by_id_and_by_name() {
    let temp_dir = TempDir::new().unwrap();
    let cli = snapshot_context(temp_dir.path());

    let by_id = cli
        .execute(&Commands::Url {
            id: Some("42".to_string()),
            name: None,
        })
        .unwrap();
    assert_eq!(
        by_id,
        "https://dev.azure.com/contoso/web/_library?itemType=VariableGroups&view=VariableGroupView&variableGroupId=42"
    );

    let by_name = cli
        .execute(&Commands::Url {
            id: None,
            name: Some("app-prod".to_string()),
        })
        .unwrap();
    assert!(by_name.ends_with("variableGroupId=3"));
}

#[test]
fn url_without_organization_is_config_error() {
    let cli = CliContext::with_config(VgtreeConfig::default(), None);
    let result = cli.execute(&Commands::Url {
        id: Some("1".to_string()),
        name: None,
    });
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}

#[test]
fn show_masks_secrets_and_reports_missing_groups() {
    let temp_dir = TempDir::new().unwrap();
    let cli = snapshot_context(temp_dir.path());

    let output = cli
        .execute(&Commands::Show {
            name: "app-prod".to_string(),
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("Password"));
    assert!(!output.contains("hunter2"));
    assert!(output.contains("variableGroupId=3"));

    let missing = cli.execute(&Commands::Show {
        name: "nope".to_string(),
        format: "text".to_string(),
    });
    assert!(matches!(missing, Err(ApiError::GroupNotFound(_))));
}

#[test]
fn invalid_format_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let cli = snapshot_context(temp_dir.path());
    let result = cli.execute(&tree(None, "yaml"));
    assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
}

#[test]
fn fetch_writes_readable_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let cli = snapshot_context(temp_dir.path());
    let output_path = temp_dir.path().join("out").join("snapshot.json");

    let message = cli
        .execute(&Commands::Fetch {
            output: output_path.clone(),
        })
        .unwrap();
    assert!(message.starts_with("Wrote 5 variable groups"));

    let reloaded = FileSource::new(&output_path).load().unwrap();
    assert_eq!(reloaded.len(), 5);
    assert_eq!(reloaded[2].modified_by_name(), "Ada");
}

#[test]
fn config_file_drives_view_mode() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("vgtree.toml");
    fs::write(&config_path, "[display]\nview = \"list\"\ncolor = false\n").unwrap();
    let input = crate::integration::support::write_snapshot(temp_dir.path());

    let cli = CliContext::new(Some(config_path), Some(input)).unwrap();
    let output = cli
        .execute(&Commands::View {
            search: None,
            mode: None,
        })
        .unwrap();
    assert!(output.contains("app-prod"));
    assert!(!output.contains("▼"));

    let tree_output = cli
        .execute(&Commands::View {
            search: None,
            mode: Some("hierarchy".to_string()),
        })
        .unwrap();
    assert!(tree_output.contains("▼ app (3)"));
}

#[test]
fn empty_snapshot_reports_no_groups() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    fs::write(&path, "[]").unwrap();
    let cli = CliContext::with_config(VgtreeConfig::default(), Some(path));

    let output = cli.execute(&tree(None, "text")).unwrap();
    assert!(output.contains("No variable groups found in this project."));
}
