///! Deckhand CLI
///!
///! Command-line interface for deploying namespaced applications

mod api;
mod commands;
mod config;
mod logging;
mod output;
mod terminal;

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use deckhand_common::dashboard::{Dashboard, DashboardOptions};

use output::OutputFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Backend server address (defaults to the configured server)
    #[arg(short, long)]
    server: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long)]
    output: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show deployable images and cluster topology
    Overview,
    /// List deployable images
    Images,
    /// Show cluster nodes and namespaces
    Cluster,
    /// Deploy the API server and client into a namespace
    Deploy {
        /// API server image
        #[arg(long)]
        api_image: String,
        /// Client image
        #[arg(long)]
        client_image: String,
        /// Target namespace
        #[arg(short, long)]
        namespace: String,
    },
    /// Delete the deployment and its namespace
    Delete { namespace: String },
    /// Show pod status of a namespace
    Status { namespace: String },
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Set the default backend server
    SetServer { url: String },
    /// Set the default output format
    SetOutput { format: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::LoggingConfig::from_verbosity(cli.verbose, cli.log_json).init()?;

    // Load config
    let mut config = config::Config::load().unwrap_or_default();

    let server = cli.server.unwrap_or_else(|| config.default_server.clone());
    let format = OutputFormat::from_name(cli.output.as_deref().unwrap_or(&config.default_output));

    // Terminal output is one-shot, so no cluster refresh after a change
    let console = Dashboard::new(api::ApiClient::new(&server), terminal::TerminalView::new(format))
        .with_options(DashboardOptions {
            refresh_after_change: false,
        });

    tracing::debug!(%server, "using backend");

    // Execute command; failures were already printed by the terminal view
    let result = match cli.command {
        Commands::Overview => commands::cluster::overview(&console).await,
        Commands::Images => commands::cluster::images(&console).await,
        Commands::Cluster => commands::cluster::cluster(&console).await,
        Commands::Deploy {
            api_image,
            client_image,
            namespace,
        } => commands::app::deploy(&console, api_image, client_image, namespace).await,
        Commands::Delete { namespace } => commands::app::delete(&console, namespace).await,
        Commands::Status { namespace } => commands::app::status(&console, &namespace).await,
        Commands::Config { command } => {
            commands::config::handle_config_command(command, &mut config, format)?;
            Ok(())
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };

    Ok(match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    })
}

/// Generate shell completions
fn generate_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_deploy() {
        let cli = Cli::try_parse_from([
            "deckhand",
            "deploy",
            "--api-image",
            "img-a",
            "--client-image",
            "img-b",
            "-n",
            "ns1",
        ])
        .unwrap();

        match cli.command {
            Commands::Deploy {
                api_image,
                client_image,
                namespace,
            } => {
                assert_eq!(api_image, "img-a");
                assert_eq!(client_image, "img-b");
                assert_eq!(namespace, "ns1");
            }
            _ => panic!("expected deploy command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["deckhand", "-o", "json", "status", "ns1", "-vv"]).unwrap();
        assert_eq!(cli.output.as_deref(), Some("json"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Status { ref namespace } if namespace == "ns1"));
    }
}
