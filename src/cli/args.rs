use std::path::PathBuf;

use clap::{Parser, Subcommand};

use iotlog::config::{DEFAULT_CONFIG_FILE, ProviderSettings};
use iotlog::state::DEFAULT_STATE_FILE;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Local state file tracking the managed logging options
    #[arg(long, global = true, default_value = DEFAULT_STATE_FILE)]
    pub state: PathBuf,

    /// AWS region (falls back to the profile's region, then us-east-1)
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Override the IoT control-plane endpoint
    #[arg(long, global = true, env = "IOTLOG_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Named profile from the shared AWS config and credentials files
    #[arg(long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,
}

impl Cli {
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            profile: self.profile.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show what apply would change
    Plan(ConfigArgs),
    /// Create or update the logging options
    Apply(ConfigArgs),
    /// Re-read remote settings, dropping the record if they are gone
    Refresh,
    /// Start tracking existing logging options
    Import(ImportArgs),
    /// Stop tracking the logging options (remote settings are kept)
    Destroy,
    /// Print the tracked record
    Show,
    /// Print the resource schema as JSON
    Schema,
}

#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    #[arg(long, short, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    pub id: String,
}
