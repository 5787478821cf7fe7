use aws_sdk_iot::types::LogLevel as SdkLogLevel;

use super::types::{GetV2LoggingOptionsOutput, SetV2LoggingOptionsInput};
use super::AwsError;

/// The IoT control-plane calls behind the logging options resource.
///
/// Wraps the SDK client, which owns credential resolution, signing and
/// retries. The region is pinned at construction since it scopes the
/// singleton the client manages.
#[derive(Clone, Debug)]
pub struct IotClient {
    client: aws_sdk_iot::Client,
    region: String,
}

impl IotClient {
    pub fn new(client: aws_sdk_iot::Client) -> Result<Self, AwsError> {
        let region = client
            .config()
            .region()
            .map(|region| region.to_string())
            .ok_or(AwsError::MissingRegion)?;
        Ok(Self { client, region })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub async fn set_v2_logging_options(
        &self,
        input: &SetV2LoggingOptionsInput,
    ) -> Result<(), AwsError> {
        tracing::debug!(
            role_arn = %input.role_arn,
            log_level = %input.default_log_level,
            disable_all_logs = input.disable_all_logs,
            "SetV2LoggingOptions"
        );

        self.client
            .set_v2_logging_options()
            .role_arn(&input.role_arn)
            .default_log_level(SdkLogLevel::from(input.default_log_level.as_str()))
            .disable_all_logs(input.disable_all_logs)
            .send()
            .await
            .map_err(|e| AwsError::from_sdk("SetV2LoggingOptions", e))?;

        Ok(())
    }

    pub async fn get_v2_logging_options(&self) -> Result<GetV2LoggingOptionsOutput, AwsError> {
        tracing::debug!("GetV2LoggingOptions");

        let output = self
            .client
            .get_v2_logging_options()
            .send()
            .await
            .map_err(|e| AwsError::from_sdk("GetV2LoggingOptions", e))?;

        Ok(GetV2LoggingOptionsOutput::from(&output))
    }
}
