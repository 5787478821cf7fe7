use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::resource::LoggingOptions;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_CONFIG_FILE: &str = "iot_logging.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Overrides for the AWS configuration chain; `None` defers to the chain.
#[derive(Debug, Clone, Default)]
pub struct ProviderSettings {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub profile: Option<String>,
}

/// Loads the desired logging options from a TOML file.
///
/// Keys are `role_arn`, `log_level` and the optional `disable_all_logs`.
/// Unknown keys are rejected, so a misspelled flag cannot silently fall back
/// to its default.
pub fn load_desired(path: &Path) -> Result<LoggingOptions, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_desired(&raw).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

pub fn parse_desired(raw: &str) -> Result<LoggingOptions, String> {
    let options: LoggingOptions = toml::from_str(raw).map_err(|e| e.message().to_string())?;
    tracing::debug!(
        role_arn = %options.role_arn,
        log_level = %options.log_level,
        disable_all_logs = options.disable_all_logs,
        "loaded desired IoT logging options"
    );
    Ok(options)
}
