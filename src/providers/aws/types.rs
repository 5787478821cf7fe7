use aws_sdk_iot::operation::get_v2_logging_options::GetV2LoggingOptionsOutput as SdkGetOutput;

use crate::resource::{LogLevel, LoggingOptions, ValidationError};

/// Input of `SetV2LoggingOptions`. Every field is always sent.
#[derive(Debug, Clone, PartialEq)]
pub struct SetV2LoggingOptionsInput {
    pub role_arn: String,
    pub default_log_level: LogLevel,
    pub disable_all_logs: bool,
}

impl From<&LoggingOptions> for SetV2LoggingOptionsInput {
    fn from(options: &LoggingOptions) -> Self {
        Self {
            role_arn: options.role_arn.to_string(),
            default_log_level: options.log_level,
            disable_all_logs: options.disable_all_logs,
        }
    }
}

/// What `GetV2LoggingOptions` reported, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetV2LoggingOptionsOutput {
    pub role_arn: Option<String>,
    pub default_log_level: Option<String>,
    pub disable_all_logs: Option<bool>,
}

impl GetV2LoggingOptionsOutput {
    /// Normalizes the remote shape; an absent flag reads as `false`.
    pub fn into_options(self) -> Result<LoggingOptions, ValidationError> {
        LoggingOptions::new(
            self.role_arn.unwrap_or_default(),
            self.default_log_level.as_deref().unwrap_or_default(),
            self.disable_all_logs.unwrap_or(false),
        )
    }
}

impl From<&SdkGetOutput> for GetV2LoggingOptionsOutput {
    fn from(output: &SdkGetOutput) -> Self {
        Self {
            role_arn: output.role_arn().map(str::to_string),
            default_log_level: output.default_log_level().map(|l| l.as_str().to_string()),
            disable_all_logs: Some(output.disable_all_logs()),
        }
    }
}

impl From<&SetV2LoggingOptionsInput> for GetV2LoggingOptionsOutput {
    fn from(input: &SetV2LoggingOptionsInput) -> Self {
        Self {
            role_arn: Some(input.role_arn.clone()),
            default_log_level: Some(input.default_log_level.as_str().to_string()),
            disable_all_logs: Some(input.disable_all_logs),
        }
    }
}
