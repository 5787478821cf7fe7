//! Drives a managed resource through its lifecycle against the local state file.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::adapter::{DeleteOutcome, ManagedResource, ReadOutcome, RemoteDeletion};
use crate::error::AppError;
use crate::resource::{AttributeChange, LoggingOptions, ResourceRecord};
use crate::state::StateFile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlanAction {
    Create,
    Update { changes: Vec<AttributeChange> },
    NoOp,
}

impl std::fmt::Display for PlanAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanAction::Create => write!(f, "create"),
            PlanAction::Update { .. } => write!(f, "update in-place"),
            PlanAction::NoOp => write!(f, "no changes"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub action: PlanAction,
    pub record: ResourceRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyReport {
    NotTracked,
    Destroyed {
        record: ResourceRecord,
        outcome: DeleteOutcome,
    },
}

pub struct Engine<R> {
    resource: R,
    state_path: PathBuf,
}

impl<R: ManagedResource> Engine<R> {
    pub fn new(resource: R, state_path: impl Into<PathBuf>) -> Self {
        Self {
            resource,
            state_path: state_path.into(),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Diff of desired vs the refreshed tracked record. Writes nothing.
    pub async fn plan(&self, desired: &LoggingOptions) -> Result<PlanAction, AppError> {
        let state = StateFile::load(&self.state_path).await?;
        let current = self.refresh_record(&state).await?;
        Ok(plan_action(current.as_ref(), desired))
    }

    pub async fn apply(&self, desired: &LoggingOptions) -> Result<ApplyReport, AppError> {
        let type_name = self.resource.type_name();
        let mut state = StateFile::load(&self.state_path).await?;
        let current = self.refresh_record(&state).await?;

        let action = plan_action(current.as_ref(), desired);
        tracing::info!(resource = type_name, action = %action, "applying");

        let record = match (&action, current) {
            (PlanAction::Create, _) => self.resource.create(desired).await?,
            (PlanAction::Update { .. }, Some(current)) => {
                self.resource.update(&current.id, desired).await?
            }
            (_, Some(current)) => current,
            (_, None) => self.resource.create(desired).await?,
        };

        state.set(type_name, record.clone());
        state.save(&self.state_path).await?;

        Ok(ApplyReport { action, record })
    }

    /// Drift detection: re-reads the tracked record and drops it when the
    /// remote object no longer exists. Other errors leave state untouched.
    pub async fn refresh(&self) -> Result<Option<ResourceRecord>, AppError> {
        let type_name = self.resource.type_name();
        let mut state = StateFile::load(&self.state_path).await?;
        let Some(tracked) = state.get(type_name).cloned() else {
            return Ok(None);
        };

        match self.resource.read(&tracked.id).await? {
            ReadOutcome::Present(record) => {
                if record != tracked {
                    tracing::info!(id = %record.id, "drift detected, updating state");
                }
                state.set(type_name, record.clone());
                state.save(&self.state_path).await?;
                Ok(Some(record))
            }
            ReadOutcome::Absent => {
                tracing::warn!(
                    resource = type_name,
                    id = %tracked.id,
                    "remote object not found, removing from state"
                );
                state.remove(type_name);
                state.save(&self.state_path).await?;
                Ok(None)
            }
        }
    }

    pub async fn import(&self, id: &str) -> Result<ResourceRecord, AppError> {
        let type_name = self.resource.type_name();
        let mut state = StateFile::load(&self.state_path).await?;
        if let Some(tracked) = state.get(type_name) {
            return Err(AppError::AlreadyTracked {
                resource_type: type_name,
                id: tracked.id.clone(),
            });
        }

        let record = self
            .resource
            .import(id)
            .await?
            .into_record()
            .ok_or_else(|| AppError::ImportNotFound {
                resource_type: type_name,
                id: id.to_string(),
            })?;

        state.set(type_name, record.clone());
        state.save(&self.state_path).await?;
        Ok(record)
    }

    pub async fn destroy(&self) -> Result<DestroyReport, AppError> {
        let type_name = self.resource.type_name();
        let mut state = StateFile::load(&self.state_path).await?;
        let Some(record) = state.get(type_name).cloned() else {
            return Ok(DestroyReport::NotTracked);
        };

        let outcome = self.resource.delete(&record).await?;
        if self.resource.remote_deletion() == RemoteDeletion::Unsupported {
            tracing::warn!(
                resource = type_name,
                id = %record.id,
                "remote settings are retained after destroy"
            );
        }

        state.remove(type_name);
        state.save(&self.state_path).await?;
        Ok(DestroyReport::Destroyed { record, outcome })
    }

    pub async fn show(&self) -> Result<Option<ResourceRecord>, AppError> {
        let state = StateFile::load(&self.state_path).await?;
        Ok(state.get(self.resource.type_name()).cloned())
    }

    async fn refresh_record(&self, state: &StateFile) -> Result<Option<ResourceRecord>, AppError> {
        match state.get(self.resource.type_name()) {
            Some(tracked) => Ok(self.resource.read(&tracked.id).await?.into_record()),
            None => Ok(None),
        }
    }
}

pub fn plan_action(current: Option<&ResourceRecord>, desired: &LoggingOptions) -> PlanAction {
    match current {
        None => PlanAction::Create,
        Some(record) => {
            let changes = record.attributes.diff(desired);
            if changes.is_empty() {
                PlanAction::NoOp
            } else {
                PlanAction::Update { changes }
            }
        }
    }
}
