pub mod aws;

use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_iot::config::Region;
use aws_sdk_iot::config::timeout::TimeoutConfig;

use aws::{AwsError, GetV2LoggingOptionsOutput, IotClient, SetV2LoggingOptionsInput};
use crate::config::{DEFAULT_REGION, ProviderSettings};

const OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// The two control-plane calls the logging options resource needs.
///
/// `IotClient` is the SDK-backed implementation; the trait is the seam tests
/// use to substitute an in-memory remote.
#[async_trait]
pub trait LoggingOptionsApi: Send + Sync {
    async fn set_v2_logging_options(&self, input: &SetV2LoggingOptionsInput)
    -> Result<(), AwsError>;

    async fn get_v2_logging_options(&self) -> Result<GetV2LoggingOptionsOutput, AwsError>;
}

/// Builds the IoT client from the standard AWS configuration chain.
///
/// Credentials come from the default provider chain (environment, shared
/// profiles, SSO, web identity, container and instance metadata). The region
/// is the explicit one, else whatever the chain resolves for the selected
/// profile, else `us-east-1`.
pub async fn build_client(settings: &ProviderSettings) -> Result<IotClient, AwsError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).timeout_config(
        TimeoutConfig::builder()
            .operation_timeout(OPERATION_TIMEOUT)
            .build(),
    );
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint) = &settings.endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    let shared_config = loader.load().await;

    let mut config = aws_sdk_iot::config::Builder::from(&shared_config);
    if shared_config.region().is_none() {
        tracing::warn!(region = DEFAULT_REGION, "no AWS region configured, using fallback");
        config = config.region(Region::new(DEFAULT_REGION));
    }

    let client = IotClient::new(aws_sdk_iot::Client::from_conf(config.build()))?;
    tracing::debug!(
        region = client.region(),
        endpoint = settings.endpoint.as_deref().unwrap_or("default"),
        profile = settings.profile.as_deref().unwrap_or("default"),
        "IoT client ready"
    );
    Ok(client)
}
