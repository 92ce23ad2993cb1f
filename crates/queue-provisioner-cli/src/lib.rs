//! # Queue Provisioner CLI
//!
//! Command-line interface for the queue provisioning module.
//!
//! This module provides CLI commands for:
//! - Validating a module configuration file
//! - Evaluating a configuration into a resource plan for the engine
//! - Projecting an engine apply report into module outputs
//! - Generating shell completions

use clap::{CommandFactory, Parser, Subcommand};
use queue_provisioner_core::{
    evaluate, ApplyReport, Declaration, LogicalId, ModuleConfig, ModuleOutputs, ProvisionerError,
};
use std::path::{Path, PathBuf};
use tracing::info;

// ============================================================================
// CLI Structure
// ============================================================================

/// Queue Provisioner CLI - Declarative queue and dead-letter-queue provisioning
#[derive(Parser)]
#[command(name = "queue-provisioner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate queue provisioning configurations into resource plans")]
#[command(
    long_about = "Queue Provisioner maps a configuration record to declarations of a \
                  primary queue, a dead-letter queue, and the redrive policy linking them"
)]
pub struct Cli {
    /// Logging level
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    pub json_logs: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a module configuration file
    Validate {
        /// Configuration file to validate
        #[arg(short, long, env = "QUEUE_PROVISIONER_CONFIG_FILE")]
        file: PathBuf,
    },

    /// Evaluate a configuration into a resource plan
    Plan {
        /// Configuration file to evaluate
        #[arg(short, long, env = "QUEUE_PROVISIONER_CONFIG_FILE")]
        file: PathBuf,

        /// Output format for the plan
        #[arg(short = 'F', long, default_value = "json")]
        format: OutputFormat,

        /// Write the plan to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Project an engine apply report into module outputs
    Outputs {
        /// Apply report produced by the provisioning engine (JSON)
        #[arg(short, long)]
        report: PathBuf,

        /// Output format
        #[arg(short = 'F', long, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Output format options
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

// ============================================================================
// CLI Error Types
// ============================================================================

/// CLI-specific errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] queue_provisioner_core::ConfigurationError),

    #[error("Validation error: {0}")]
    Validation(#[from] queue_provisioner_core::ValidationError),

    #[error("Outputs error: {0}")]
    Outputs(#[from] queue_provisioner_core::OutputsError),

    #[error("Invalid argument: {arg} - {message}")]
    InvalidArgument { arg: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl From<ProvisionerError> for CliError {
    fn from(err: ProvisionerError) -> Self {
        match err {
            ProvisionerError::Validation(e) => Self::Validation(e),
            ProvisionerError::Configuration(e) => Self::Configuration(e),
            ProvisionerError::Outputs(e) => Self::Outputs(e),
            ProvisionerError::Parse(e) => Self::InvalidArgument {
                arg: "logical id".to_string(),
                message: e.to_string(),
            },
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

/// Main CLI entry point
pub fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    match cli.command {
        Commands::Validate { file } => execute_validate_command(&file),
        Commands::Plan {
            file,
            format,
            output,
        } => execute_plan_command(&file, format, output.as_deref()),
        Commands::Outputs { report, format } => execute_outputs_command(&report, format),
        Commands::Completions { shell } => execute_completions_command(shell),
    }
}

/// Initialize logging based on CLI arguments
///
/// Logs go to stderr so plan and outputs payloads on stdout stay parseable.
fn initialize_logging(cli: &Cli) -> Result<(), CliError> {
    let filter = tracing_subscriber::EnvFilter::try_new(&cli.log_level).map_err(|e| {
        CliError::InvalidArgument {
            arg: "log-level".to_string(),
            message: e.to_string(),
        }
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if cli.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

// ============================================================================
// Command Implementations
// ============================================================================

/// Execute validate command
fn execute_validate_command(file: &Path) -> Result<(), CliError> {
    let config = ModuleConfig::load_from_file(file)?;

    info!(
        queue = %config.queue_name,
        dead_letter_queue = %config.dlq_name,
        "Configuration is valid"
    );
    println!("Configuration is valid: {}", file.display());

    Ok(())
}

/// Execute plan command
fn execute_plan_command(
    file: &Path,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let config = ModuleConfig::load_from_file(file)?;
    let plan = evaluate(&config)?;
    let declarations = plan.in_creation_order();

    let rendered = render_plan(&declarations, &format)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!(path = %path.display(), "Plan written");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Execute outputs command
fn execute_outputs_command(report_path: &Path, format: OutputFormat) -> Result<(), CliError> {
    let contents = std::fs::read_to_string(report_path)?;
    let report: ApplyReport =
        serde_json::from_str(&contents).map_err(|e| CliError::Serialization {
            message: format!("Invalid apply report: {}", e),
        })?;

    let outputs = ModuleOutputs::project(&report)?;
    print!("{}", render_outputs(&outputs, &format)?);

    Ok(())
}

/// Execute completions command
fn execute_completions_command(shell: clap_complete::Shell) -> Result<(), CliError> {
    let mut command = Cli::command();
    clap_complete::generate(
        shell,
        &mut command,
        "queue-provisioner",
        &mut std::io::stdout(),
    );
    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a declaration list in the requested format
fn render_plan(declarations: &[Declaration], format: &OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(declarations)
            .map(|s| s + "\n")
            .map_err(|e| CliError::Serialization {
                message: e.to_string(),
            }),
        OutputFormat::Yaml => {
            serde_yaml::to_string(declarations).map_err(|e| CliError::Serialization {
                message: e.to_string(),
            })
        }
        OutputFormat::Text => Ok(render_plan_text(declarations)),
    }
}

fn render_plan_text(declarations: &[Declaration]) -> String {
    let mut lines = Vec::with_capacity(declarations.len() + 1);
    lines.push(format!(
        "Plan: {} resources, in creation order",
        declarations.len()
    ));

    for (index, declaration) in declarations.iter().enumerate() {
        let edges = if declaration.depends_on.is_empty() {
            "no dependencies".to_string()
        } else {
            let ids: Vec<&str> = declaration
                .depends_on
                .iter()
                .map(LogicalId::as_str)
                .collect();
            format!("depends on {}", ids.join(", "))
        };
        lines.push(format!("{}. {} ({})", index + 1, declaration.id, edges));
    }

    lines.join("\n") + "\n"
}

/// Render module outputs in the requested format
fn render_outputs(outputs: &ModuleOutputs, format: &OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(outputs)
            .map(|s| s + "\n")
            .map_err(|e| CliError::Serialization {
                message: e.to_string(),
            }),
        OutputFormat::Yaml => {
            serde_yaml::to_string(outputs).map_err(|e| CliError::Serialization {
                message: e.to_string(),
            })
        }
        OutputFormat::Text => Ok(format!(
            "queue_url = {}\nqueue_arn = {}\nqueue_name = {}\ndlq_url = {}\ndlq_arn = {}\ndlq_name = {}\n",
            outputs.queue_url,
            outputs.queue_arn,
            outputs.queue_name,
            outputs.dlq_url,
            outputs.dlq_arn,
            outputs.dlq_name,
        )),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
