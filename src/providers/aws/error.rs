use aws_sdk_iot::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Error codes the control plane uses when no logging options exist.
///
/// `NotConfiguredException` is what an account that never set V2 logging
/// options gets back.
pub const NOT_FOUND_CODES: &[&str] = &["ResourceNotFoundException", "NotConfiguredException"];

/// Errors from the IoT control-plane client.
///
/// SECURITY: Error messages must NEVER contain credentials.
#[derive(Debug, Error)]
pub enum AwsError {
    /// Service returned an error response; code and message are kept verbatim
    #[error("{code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Anything that is not a coded service error: credential resolution,
    /// dispatch, timeouts, unparseable responses.
    #[error("{operation} failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("no AWS region configured; pass --region or set AWS_REGION")]
    MissingRegion,
}

impl AwsError {
    pub fn code(&self) -> Option<&str> {
        match self {
            AwsError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code().is_some_and(|code| NOT_FOUND_CODES.contains(&code))
    }

    /// Classifies an SDK failure. Service errors that carry a code become
    /// `Api`; everything else becomes `Transport` with the full error chain.
    pub fn from_sdk<E>(operation: &'static str, err: SdkError<E>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
    {
        match err.code() {
            Some(code) => AwsError::Api {
                status: err
                    .raw_response()
                    .map(|response| response.status().as_u16())
                    .unwrap_or_default(),
                code: code.to_string(),
                message: err.message().unwrap_or_default().to_string(),
            },
            None => AwsError::Transport {
                operation,
                message: DisplayErrorContext(&err).to_string(),
            },
        }
    }
}
