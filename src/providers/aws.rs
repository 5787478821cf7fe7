mod client;
mod error;
mod types;

pub use client::IotClient;
pub use error::{AwsError, NOT_FOUND_CODES};
pub use types::{GetV2LoggingOptionsOutput, SetV2LoggingOptionsInput};

use async_trait::async_trait;

use super::LoggingOptionsApi;

#[async_trait]
impl LoggingOptionsApi for IotClient {
    async fn set_v2_logging_options(
        &self,
        input: &SetV2LoggingOptionsInput,
    ) -> Result<(), AwsError> {
        IotClient::set_v2_logging_options(self, input).await
    }

    async fn get_v2_logging_options(&self) -> Result<GetV2LoggingOptionsOutput, AwsError> {
        IotClient::get_v2_logging_options(self).await
    }
}
