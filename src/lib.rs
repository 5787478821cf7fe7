//! iotlog - AWS IoT V2 logging options, managed as a tracked resource
//!
//! A library for reconciling the account-wide IoT logging options with a
//! declared desired state and tracking the result in a local state file.

pub mod adapter;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod providers;
pub mod resource;
pub mod schema;
pub mod state;

pub use adapter::iot_logging::{IotLoggingOptions, RESOURCE_TYPE};
pub use adapter::{DeleteOutcome, ManagedResource, ReadOutcome, RemoteDeletion, ResourceError};
pub use engine::{ApplyReport, DestroyReport, Engine, PlanAction};
pub use error::AppError;
pub use providers::LoggingOptionsApi;
pub use providers::aws::{AwsError, IotClient};
pub use resource::{LogLevel, LoggingOptions, ResourceRecord, RoleArn, SingletonId};
