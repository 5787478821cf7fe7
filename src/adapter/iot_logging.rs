use async_trait::async_trait;

use super::{DeleteOutcome, ManagedResource, ReadOutcome, RemoteDeletion, ResourceError};
use crate::providers::LoggingOptionsApi;
use crate::providers::aws::SetV2LoggingOptionsInput;
use crate::resource::{
    LogLevel, LoggingOptions, ROLE_ARN_MAX_LEN, ROLE_ARN_MIN_LEN, ResourceRecord, SingletonId,
};
use crate::schema::{Attribute, AttributeType, Schema, Validator};

pub const RESOURCE_TYPE: &str = "aws_iot_logging_options";

/// The account/region-wide IoT V2 logging options.
///
/// Create and Update are the same remote overwrite followed by a read-back;
/// Delete never reaches the remote API.
pub struct IotLoggingOptions<A> {
    api: A,
    region: String,
}

impl<A: LoggingOptionsApi> IotLoggingOptions<A> {
    pub fn new(api: A, region: impl Into<String>) -> Self {
        Self {
            api,
            region: region.into(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    async fn apply(
        &self,
        id: &SingletonId,
        desired: &LoggingOptions,
    ) -> Result<ResourceRecord, ResourceError> {
        let input = SetV2LoggingOptionsInput::from(desired);
        self.api.set_v2_logging_options(&input).await?;

        match self.fetch(id).await? {
            ReadOutcome::Present(record) => {
                if record.attributes != *desired {
                    tracing::warn!(
                        id = %id,
                        changes = record.attributes.diff(desired).len(),
                        "IoT logging options differ from desired state after apply"
                    );
                }
                Ok(record)
            }
            ReadOutcome::Absent => Err(ResourceError::MissingAfterApply {
                resource_type: RESOURCE_TYPE,
                id: id.clone(),
            }),
        }
    }

    async fn fetch(&self, id: &SingletonId) -> Result<ReadOutcome, ResourceError> {
        match self.api.get_v2_logging_options().await {
            Ok(output) => {
                let attributes = output
                    .into_options()
                    .map_err(ResourceError::InvalidRemoteState)?;
                Ok(ReadOutcome::Present(ResourceRecord {
                    id: id.clone(),
                    attributes,
                }))
            }
            Err(err) if err.is_not_found() => {
                tracing::warn!(id = %id, "IoT logging options not found");
                Ok(ReadOutcome::Absent)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl<A: LoggingOptionsApi> ManagedResource for IotLoggingOptions<A> {
    fn type_name(&self) -> &'static str {
        RESOURCE_TYPE
    }

    fn remote_deletion(&self) -> RemoteDeletion {
        RemoteDeletion::Unsupported
    }

    fn schema(&self) -> Schema {
        Schema {
            resource_type: RESOURCE_TYPE,
            importable: true,
            remote_delete: self.remote_deletion() == RemoteDeletion::Supported,
            attributes: vec![
                Attribute::required("role_arn", AttributeType::String).with_validator(
                    Validator::StringLenBetween {
                        min: ROLE_ARN_MIN_LEN,
                        max: ROLE_ARN_MAX_LEN,
                    },
                ),
                Attribute::required("log_level", AttributeType::String).with_validator(
                    Validator::StringInSlice {
                        values: LogLevel::ALL.iter().map(|l| l.as_str().to_string()).collect(),
                        ignore_case: false,
                    },
                ),
                Attribute::optional(
                    "disable_all_logs",
                    AttributeType::Bool,
                    serde_json::Value::Bool(false),
                ),
            ],
        }
    }

    async fn create(&self, desired: &LoggingOptions) -> Result<ResourceRecord, ResourceError> {
        let id = SingletonId::for_scope(&self.region);
        tracing::info!(
            id = %id,
            role_arn = %desired.role_arn,
            log_level = %desired.log_level,
            disable_all_logs = desired.disable_all_logs,
            "creating IoT logging options"
        );
        self.apply(&id, desired).await
    }

    async fn read(&self, id: &SingletonId) -> Result<ReadOutcome, ResourceError> {
        self.fetch(id).await
    }

    async fn update(
        &self,
        id: &SingletonId,
        desired: &LoggingOptions,
    ) -> Result<ResourceRecord, ResourceError> {
        tracing::info!(
            id = %id,
            role_arn = %desired.role_arn,
            log_level = %desired.log_level,
            disable_all_logs = desired.disable_all_logs,
            "updating IoT logging options in place"
        );
        self.apply(id, desired).await
    }

    async fn delete(&self, record: &ResourceRecord) -> Result<DeleteOutcome, ResourceError> {
        tracing::warn!(
            id = %record.id,
            "IoT logging options cannot be deleted remotely; detaching"
        );
        Ok(DeleteOutcome::Detached)
    }

    async fn import(&self, id: &str) -> Result<ReadOutcome, ResourceError> {
        let id = SingletonId::parse(id)?;
        tracing::info!(id = %id, "importing IoT logging options");
        self.fetch(&id).await
    }
}
