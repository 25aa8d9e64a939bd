//! CLI Tooling
//!
//! Command-line interface for browsing variable groups. Every command loads
//! the groups once, applies the search filter, and rebuilds the hierarchy
//! from the filtered subset.

use crate::config::{ConfigLoader, VgtreeConfig};
use crate::error::{ApiError, SourceError};
use crate::expansion::ExpansionState;
use crate::links;
use crate::logging::LoggingConfig;
use crate::record::{VariableGroup, VariableGroupList};
use crate::render;
use crate::source::{AzureDevOpsSource, FileSource, VariableGroupSource};
use crate::tree::HierarchyBuilder;
use crate::types::GroupId;
use crate::views::{sort_by_name, SearchQuery, Summary, ViewMode};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// vgtree - Browse Azure DevOps variable groups as a hierarchy
#[derive(Parser)]
#[command(name = "vgtree")]
#[command(about = "Browse Azure DevOps variable groups as a name-derived hierarchy")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Read variable groups from a JSON snapshot instead of the REST API
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold logging flags over the configured logging section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show variable groups as a hierarchy derived from their names
    Tree {
        /// Case-insensitive filter on name or description
        #[arg(long)]
        search: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Expand only these folder paths (and their ancestors)
        #[arg(long)]
        expand: Vec<String>,
        /// Show top-level entries only
        #[arg(long, conflicts_with = "expand")]
        collapsed: bool,
    },
    /// Show variable groups as a flat list sorted by name
    List {
        /// Case-insensitive filter on name or description
        #[arg(long)]
        search: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show variable groups in the configured view mode
    View {
        /// Case-insensitive filter on name or description
        #[arg(long)]
        search: Option<String>,
        /// Override the configured view (hierarchy or list)
        #[arg(long)]
        mode: Option<String>,
    },
    /// Show one variable group and its variables
    Show {
        /// Full variable group name
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the library page URL of a variable group
    Url {
        /// Variable group id
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        id: Option<String>,
        /// Full variable group name (resolved through the source)
        #[arg(long)]
        name: Option<String>,
    },
    /// Fetch variable groups and write them to a JSON snapshot
    Fetch {
        /// Snapshot file to write
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::InvalidArgument(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// How the tree's folders start out.
#[derive(Debug, Clone)]
enum InitialExpansion {
    All,
    Collapsed,
    Paths(Vec<String>),
}

/// CLI context holding resolved configuration and the chosen source.
pub struct CliContext {
    config: VgtreeConfig,
    input: Option<PathBuf>,
}

impl CliContext {
    /// Load configuration from `config_path`, or from the standard sources.
    pub fn new(config_path: Option<PathBuf>, input: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => {
                let cwd = std::env::current_dir().map_err(|e| {
                    ApiError::ConfigError(format!("Failed to read current directory: {}", e))
                })?;
                ConfigLoader::load(&cwd)?
            }
        };
        Ok(Self::with_config(config, input))
    }

    pub fn with_config(config: VgtreeConfig, input: Option<PathBuf>) -> Self {
        Self { config, input }
    }

    pub fn config(&self) -> &VgtreeConfig {
        &self.config
    }

    fn source(&self) -> Result<Box<dyn VariableGroupSource>, ApiError> {
        match &self.input {
            Some(path) => Ok(Box::new(FileSource::new(path.clone()))),
            None => Ok(Box::new(AzureDevOpsSource::from_config(&self.config.organization)?)),
        }
    }

    fn load_groups(&self) -> Result<Vec<VariableGroup>, ApiError> {
        let source = self.source()?;
        let runtime = tokio::runtime::Runtime::new().map_err(SourceError::IoError)?;
        let started = Instant::now();
        let groups = runtime.block_on(source.fetch())?;
        info!(
            source = %source.describe(),
            count = groups.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Loaded variable groups"
        );
        Ok(groups)
    }

    /// Library URL for a group, when the organization is configured.
    fn group_url(&self, id: &GroupId) -> Result<String, ApiError> {
        let organization = &self.config.organization;
        let base_url = organization.base_url()?;
        let project = organization.project_name()?;
        Ok(links::variable_group_url(&base_url, project, id))
    }

    fn find_by_name<'g>(groups: &'g [VariableGroup], name: &str) -> Result<&'g VariableGroup, ApiError> {
        groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| ApiError::GroupNotFound(name.to_string()))
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        debug!(command = command_name(command), "Executing command");
        let result = self.execute_inner(command);
        if let Err(e) = &result {
            warn!(command = command_name(command), error = %e, "Command failed");
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Tree {
                search,
                format,
                expand,
                collapsed,
            } => {
                let format = parse_format(format)?;
                let expansion = if *collapsed {
                    InitialExpansion::Collapsed
                } else if !expand.is_empty() {
                    InitialExpansion::Paths(expand.clone())
                } else {
                    InitialExpansion::All
                };
                let groups = self.load_groups()?;
                self.render_tree(&groups, search.as_deref(), format, expansion)
            }
            Commands::List { search, format } => {
                let format = parse_format(format)?;
                let groups = self.load_groups()?;
                self.render_list(&groups, search.as_deref(), format)
            }
            Commands::View { search, mode } => {
                let mode = match mode {
                    Some(raw) => raw.parse::<ViewMode>().map_err(ApiError::InvalidArgument)?,
                    None => self.config.display.view,
                };
                let groups = self.load_groups()?;
                match mode {
                    ViewMode::Hierarchy => self.render_tree(
                        &groups,
                        search.as_deref(),
                        OutputFormat::Text,
                        InitialExpansion::All,
                    ),
                    ViewMode::List => {
                        self.render_list(&groups, search.as_deref(), OutputFormat::Text)
                    }
                }
            }
            Commands::Show { name, format } => {
                let format = parse_format(format)?;
                let groups = self.load_groups()?;
                let group = Self::find_by_name(&groups, name)?;
                let url = match self.group_url(&group.id) {
                    Ok(url) => Some(url),
                    Err(e) => {
                        debug!("No detail URL for {}: {}", group.name, e);
                        None
                    }
                };
                match format {
                    OutputFormat::Text => Ok(render::format_group_detail_text(
                        group,
                        url.as_deref(),
                        self.config.display.color,
                    )),
                    OutputFormat::Json => render::format_group_detail_json(group, url.as_deref()),
                }
            }
            Commands::Url { id, name } => {
                let id = match (id, name) {
                    (Some(id), _) => GroupId::parse(id),
                    (None, Some(name)) => {
                        let groups = self.load_groups()?;
                        Self::find_by_name(&groups, name)?.id.clone()
                    }
                    (None, None) => {
                        return Err(ApiError::InvalidArgument(
                            "Either --id or --name is required".to_string(),
                        ))
                    }
                };
                self.group_url(&id)
            }
            Commands::Fetch { output } => {
                let groups = self.load_groups()?;
                write_snapshot(output, groups)
            }
        }
    }

    fn render_tree(
        &self,
        groups: &[VariableGroup],
        search: Option<&str>,
        format: OutputFormat,
        initial: InitialExpansion,
    ) -> Result<String, ApiError> {
        let query = SearchQuery::new(search);
        let filtered = query.filter(groups);
        debug!(shown = filtered.len(), total = groups.len(), "Applied search filter");

        let builder = HierarchyBuilder::new();
        let hierarchy = builder.build(filtered.iter().copied());
        for shadowed in &hierarchy.shadowed {
            warn!(
                name = %shadowed.name,
                id = %shadowed.id,
                "Duplicate variable group name; keeping the first occurrence"
            );
        }

        let summary = Summary::new(filtered.len(), groups.len(), &query);
        match format {
            OutputFormat::Json => render::format_tree_json(&hierarchy.root, &summary),
            OutputFormat::Text => {
                let expansion = match initial {
                    InitialExpansion::All => ExpansionState::all_expanded(&hierarchy.root),
                    InitialExpansion::Collapsed => ExpansionState::new(),
                    InitialExpansion::Paths(paths) => {
                        let mut state = ExpansionState::new();
                        for path in &paths {
                            state.expand_with_ancestors(path, builder.delimiter());
                        }
                        state.retain_present(&hierarchy.root);
                        state
                    }
                };
                Ok(render::format_tree_text(
                    &hierarchy.root,
                    &expansion,
                    &summary,
                    self.config.display.color,
                ))
            }
        }
    }

    fn render_list(
        &self,
        groups: &[VariableGroup],
        search: Option<&str>,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        let query = SearchQuery::new(search);
        let mut filtered = query.filter(groups);
        sort_by_name(&mut filtered);

        let summary = Summary::new(filtered.len(), groups.len(), &query);
        match format {
            OutputFormat::Text => Ok(render::format_list_text(
                &filtered,
                &summary,
                self.config.display.color,
            )),
            OutputFormat::Json => render::format_list_json(&filtered, &summary),
        }
    }
}

fn write_snapshot(output: &Path, groups: Vec<VariableGroup>) -> Result<String, ApiError> {
    let count = groups.len();
    let list = VariableGroupList {
        count: Some(count as u64),
        value: groups,
    };
    let json = serde_json::to_string_pretty(&list)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::OutputError(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    std::fs::write(output, json).map_err(|e| {
        ApiError::OutputError(format!("Failed to write {}: {}", output.display(), e))
    })?;
    info!(path = %output.display(), count, "Wrote snapshot");
    Ok(format!(
        "Wrote {} variable groups to {}",
        count,
        output.display()
    ))
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Tree { .. } => "tree",
        Commands::List { .. } => "list",
        Commands::View { .. } => "view",
        Commands::Show { .. } => "show",
        Commands::Url { .. } => "url",
        Commands::Fetch { .. } => "fetch",
    }
}
