use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ROLE_ARN_MIN_LEN: usize = 1;
pub const ROLE_ARN_MAX_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("role_arn must be between {min} and {max} characters, got {actual}")]
    RoleArnLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("log_level must be one of DEBUG, INFO, ERROR, WARN, DISABLED, got '{0}'")]
    LogLevel(String),

    #[error("identifier must not be empty")]
    EmptyId,
}

/// Default verbosity applied account-wide.
///
/// Values are case-sensitive on the wire and in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum LogLevel {
    Debug,
    Info,
    Error,
    Warn,
    Disabled,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Disabled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Disabled => "DISABLED",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ValidationError::LogLevel(s.to_string()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, ValidationError> {
        value.parse()
    }
}

/// IAM role ARN assumed by the logging subsystem, length-checked on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleArn(String);

impl RoleArn {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if !(ROLE_ARN_MIN_LEN..=ROLE_ARN_MAX_LEN).contains(&actual) {
            return Err(ValidationError::RoleArnLength {
                min: ROLE_ARN_MIN_LEN,
                max: ROLE_ARN_MAX_LEN,
                actual,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoleArn {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RoleArn::new(value)
    }
}

impl From<RoleArn> for String {
    fn from(arn: RoleArn) -> Self {
        arn.0
    }
}

impl fmt::Display for RoleArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The account-level V2 logging options.
///
/// The same struct (and therefore the same field names) is used for the
/// configuration file, the request body and the tracked state record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct LoggingOptions {
    pub role_arn: RoleArn,
    pub log_level: LogLevel,
    #[serde(default)]
    pub disable_all_logs: bool,
}

impl LoggingOptions {
    pub fn new(
        role_arn: impl Into<String>,
        log_level: &str,
        disable_all_logs: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            role_arn: RoleArn::new(role_arn)?,
            log_level: log_level.parse()?,
            disable_all_logs,
        })
    }

    /// Attribute-level differences, `self` being the prior value.
    pub fn diff(&self, desired: &LoggingOptions) -> Vec<AttributeChange> {
        let mut changes = Vec::new();
        if self.role_arn != desired.role_arn {
            changes.push(AttributeChange::new(
                "role_arn",
                self.role_arn.as_str(),
                desired.role_arn.as_str(),
            ));
        }
        if self.log_level != desired.log_level {
            changes.push(AttributeChange::new(
                "log_level",
                self.log_level.as_str(),
                desired.log_level.as_str(),
            ));
        }
        if self.disable_all_logs != desired.disable_all_logs {
            changes.push(AttributeChange::new(
                "disable_all_logs",
                self.disable_all_logs.to_string(),
                desired.disable_all_logs.to_string(),
            ));
        }
        changes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeChange {
    pub attribute: String,
    pub before: String,
    pub after: String,
}

impl AttributeChange {
    fn new(attribute: &str, before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            attribute: attribute.to_string(),
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Bookkeeping identifier of a singleton remote object.
///
/// The remote API has no key for the logging options; there is exactly one
/// per account and region, so the identifier is derived from the scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SingletonId(String);

impl SingletonId {
    pub fn for_scope(region: &str) -> Self {
        Self(region.to_string())
    }

    /// Import passthrough: the identifier is kept verbatim. Only blank
    /// identifiers are rejected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SingletonId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SingletonId::parse(&value)
    }
}

impl From<SingletonId> for String {
    fn from(id: SingletonId) -> Self {
        id.0
    }
}

impl fmt::Display for SingletonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked record: the synthesized identifier plus the last read state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: SingletonId,
    pub attributes: LoggingOptions,
}
