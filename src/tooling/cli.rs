//! CLI Tooling
//!
//! Command-line interface over the project catalog: list and resolve project
//! covers, explain the heuristic, export records, and manage manual overrides.

use crate::catalog::{Catalog, OverrideUpdate};
use crate::config::{ConfigLoader, CoverpickConfig};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::store::{JsonAnalysisStore, JsonOverrideStore, LocalFolderLister};
use crate::tooling::format::{
    format_explain_text, format_override_text, format_projects_text, format_resolution_text,
};
use crate::types::{CoverFit, FocalPosition};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Coverpick CLI - deterministic cover photo selection
#[derive(Parser)]
#[command(name = "coverpick")]
#[command(about = "Deterministic cover photo selection for project portfolio folders")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
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
    /// List projects with their resolved covers
    Projects {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Resolve the cover of one project
    Resolve {
        /// Project folder name
        project: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the heuristic score of every photo in a project
    Explain {
        /// Project folder name
        project: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Export project records for the presentation layer as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Include projects without photos
        #[arg(long)]
        include_empty: bool,
    },
    /// Manage manual cover overrides
    Override {
        #[command(subcommand)]
        command: OverrideCommands,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Subcommand, Debug, Clone)]
pub enum OverrideCommands {
    /// Show the stored override for a project
    Show {
        project: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Set or update the override for a project
    Set {
        project: String,
        /// Cover photo id or filename
        #[arg(long)]
        photo: Option<String>,
        /// Focal position (top, center, bottom)
        #[arg(long)]
        position: Option<FocalPosition>,
        /// Fit (cover, contain)
        #[arg(long)]
        fit: Option<CoverFit>,
    },
    /// Remove the override for a project
    Clear { project: String },
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Projects { .. } => "projects",
        Commands::Resolve { .. } => "resolve",
        Commands::Explain { .. } => "explain",
        Commands::Export { .. } => "export",
        Commands::Config => "config",
        Commands::Override { command } => match command {
            OverrideCommands::Show { .. } => "override.show",
            OverrideCommands::Set { .. } => "override.set",
            OverrideCommands::Clear { .. } => "override.clear",
        },
    }
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

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// CLI context: loaded config plus the catalog built from it.
pub struct CliContext {
    workspace_root: PathBuf,
    config: CoverpickConfig,
    catalog: Catalog,
}

impl CliContext {
    /// Load configuration and wire the stores it names.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::from_config(workspace_root, config)
    }

    pub fn from_config(workspace_root: PathBuf, config: CoverpickConfig) -> Result<Self, ApiError> {
        let paths = config.stores.resolve_paths(&workspace_root)?;
        let lister = LocalFolderLister::new(config.library.resolve_root(&workspace_root))
            .with_extensions(&config.library.extensions);
        let catalog = Catalog::new(
            Arc::new(lister),
            Arc::new(JsonOverrideStore::new(paths.overrides)),
            Arc::new(JsonAnalysisStore::new(paths.analysis)),
            config.focal_table(),
        );
        Ok(Self {
            workspace_root,
            config,
            catalog,
        })
    }

    pub fn config(&self) -> &CoverpickConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn workspace_root(&self) -> &PathBuf {
        &self.workspace_root
    }

    /// Execute a CLI command, returning the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let result = self.execute_inner(command);
        match &result {
            Ok(_) => info!(command = name, "Command completed"),
            Err(e) => tracing::error!(command = name, error = %e, "Command failed"),
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Projects { format } => {
                let format = parse_format(format)?;
                let records = self.catalog.resolve_all()?;
                match format {
                    OutputFormat::Text => Ok(format_projects_text(&records)),
                    OutputFormat::Json => to_json(&records),
                }
            }
            Commands::Resolve { project, format } => {
                let format = parse_format(format)?;
                let resolution = self.catalog.resolve_project(project)?;
                match format {
                    OutputFormat::Text => Ok(format_resolution_text(project, &resolution)),
                    OutputFormat::Json => to_json(&resolution),
                }
            }
            Commands::Explain { project, format } => {
                let format = parse_format(format)?;
                let scores = self.catalog.explain(project)?;
                match format {
                    OutputFormat::Text => Ok(format_explain_text(project, &scores)),
                    OutputFormat::Json => to_json(&scores),
                }
            }
            Commands::Export {
                output,
                include_empty,
            } => {
                let export = self.catalog.export(*include_empty)?;
                let json = to_json(&export)?;
                match output {
                    Some(path) => {
                        let path = self.workspace_root.join(path);
                        if let Some(parent) = path.parent() {
                            std::fs::create_dir_all(parent)?;
                        }
                        std::fs::write(&path, json)?;
                        Ok(format!(
                            "Exported {} project(s) to {}",
                            export.projects.len(),
                            path.display()
                        ))
                    }
                    None => Ok(json),
                }
            }
            Commands::Override { command } => self.handle_override_command(command),
            Commands::Config => toml::to_string_pretty(&self.config).map_err(|e| {
                ApiError::ConfigError(format!("Failed to serialize configuration: {}", e))
            }),
        }
    }

    fn handle_override_command(&self, command: &OverrideCommands) -> Result<String, ApiError> {
        match command {
            OverrideCommands::Show { project, format } => {
                let format = parse_format(format)?;
                let stored = self.catalog.overrides().get(project)?;
                match format {
                    OutputFormat::Text => Ok(format_override_text(project, stored.as_ref())),
                    OutputFormat::Json => to_json(&stored),
                }
            }
            OverrideCommands::Set {
                project,
                photo,
                position,
                fit,
            } => {
                let update = OverrideUpdate {
                    photo: photo.clone(),
                    position: *position,
                    fit: *fit,
                };
                let stored = self.catalog.set_override(project, &update)?;
                Ok(format_override_text(project, Some(&stored)))
            }
            OverrideCommands::Clear { project } => {
                if self.catalog.clear_override(project)? {
                    Ok(format!("Cleared override for {}", project))
                } else {
                    Ok(format!("No override stored for {}", project))
                }
            }
        }
    }
}
