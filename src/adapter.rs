pub mod iot_logging;

use async_trait::async_trait;
use thiserror::Error;

use crate::providers::aws::AwsError;
use crate::resource::{LoggingOptions, ResourceRecord, SingletonId, ValidationError};
use crate::schema::Schema;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// Remote errors pass through unchanged
    #[error(transparent)]
    Remote(#[from] AwsError),

    #[error("remote returned invalid logging options: {0}")]
    InvalidRemoteState(ValidationError),

    #[error("{resource_type} '{id}' not found immediately after apply")]
    MissingAfterApply {
        resource_type: &'static str,
        id: SingletonId,
    },
}

/// Whether destroying a tracked record can remove the remote object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteDeletion {
    Supported,
    /// The remote API has no delete or reset; destroy only stops tracking.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Present(ResourceRecord),
    /// Remote reported not-found; the caller drops its record.
    Absent,
}

impl ReadOutcome {
    pub fn into_record(self) -> Option<ResourceRecord> {
        match self {
            ReadOutcome::Present(record) => Some(record),
            ReadOutcome::Absent => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Tracking removed, remote object left as it was.
    Detached,
}

/// Create/Read/Update/Delete/Import against one remote object type.
#[async_trait]
pub trait ManagedResource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn remote_deletion(&self) -> RemoteDeletion;

    fn schema(&self) -> Schema;

    async fn create(&self, desired: &LoggingOptions) -> Result<ResourceRecord, ResourceError>;

    async fn read(&self, id: &SingletonId) -> Result<ReadOutcome, ResourceError>;

    async fn update(
        &self,
        id: &SingletonId,
        desired: &LoggingOptions,
    ) -> Result<ResourceRecord, ResourceError>;

    async fn delete(&self, record: &ResourceRecord) -> Result<DeleteOutcome, ResourceError>;

    async fn import(&self, id: &str) -> Result<ReadOutcome, ResourceError>;
}
