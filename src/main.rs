mod backend;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod kitchen;
mod logging;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::ENVIRONMENT_VAR;
use crate::environment::Environment;
use crate::kitchen::Action;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the kitchen dashboard
    Start {
        /// Image file to select on startup
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,

        /// Backend base URL, or `local`. Overrides KITCHEN_ENVIRONMENT and the saved backend.
        #[arg(long, value_name = "URL")]
        backend_url: Option<String>,

        /// Disable background colors
        #[arg(long = "no-background", action = ArgAction::SetTrue)]
        no_background: bool,

        /// Give up on a request after this many seconds
        #[arg(long, value_name = "SECONDS")]
        timeout_secs: Option<u64>,
    },
    /// Perform one action against the backend and print the resulting card
    Run {
        /// Action to perform
        #[arg(value_enum)]
        action: Action,

        /// Image file to upload (detect, spoilage and waste)
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,

        /// Backend base URL, or `local`. Overrides KITCHEN_ENVIRONMENT and the saved backend.
        #[arg(long, value_name = "URL")]
        backend_url: Option<String>,

        /// Give up on the request after this many seconds
        #[arg(long, value_name = "SECONDS")]
        timeout_secs: Option<u64>,
    },
    /// Save the backend to use by default
    SetBackend {
        /// Backend base URL, or `local`
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            image,
            backend_url,
            no_background,
            timeout_secs,
        } => {
            let environment = resolve_environment(backend_url.as_deref(), &config_path)?;
            let session = setup_session(
                environment,
                timeout_secs.map(Duration::from_secs),
                image.as_deref(),
            )
            .await?;
            run_tui_mode(session, !no_background).await
        }
        Command::Run {
            action,
            image,
            backend_url,
            timeout_secs,
        } => {
            let environment = resolve_environment(backend_url.as_deref(), &config_path)?;
            let session = setup_session(
                environment,
                timeout_secs.map(Duration::from_secs),
                image.as_deref(),
            )
            .await?;
            if let Err(e) = run_headless_mode(session, action).await {
                // Reported here; returning the error would print it a second time
                print_cmd_error!(&format!("{} failed", action.label()), e.to_string().as_str());
                std::process::exit(1);
            }
            Ok(())
        }
        Command::SetBackend { url } => {
            let environment: Environment = url.parse()?;
            let config = Config::new(match &environment {
                Environment::Local => None,
                Environment::Custom { backend_url } => Some(backend_url.clone()),
            });
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Backend saved", "{}", environment.backend_url());
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Resetting", "Deleting {}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Backend for this run: the flag, then `KITCHEN_ENVIRONMENT`, then the saved backend.
fn resolve_environment(
    explicit_url: Option<&str>,
    config_path: &Path,
) -> Result<Environment, Box<dyn Error>> {
    let env_value = std::env::var(ENVIRONMENT_VAR).ok();
    let configured = Config::load_or_default(config_path)
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?
        .backend_url;
    let environment =
        Environment::resolve(explicit_url, env_value.as_deref(), configured.as_deref())?;
    Ok(environment)
}
