use thiserror::Error;

use crate::adapter::ResourceError;
use crate::config::ConfigError;
use crate::providers::aws::AwsError;
use crate::resource::SingletonId;
use crate::state::StateError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Provider(#[from] AwsError),

    #[error("{resource_type} is already tracked as '{id}'; destroy it before importing")]
    AlreadyTracked {
        resource_type: &'static str,
        id: SingletonId,
    },

    #[error("cannot import {resource_type} '{id}': remote object does not exist")]
    ImportNotFound {
        resource_type: &'static str,
        id: String,
    },
}
