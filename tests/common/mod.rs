#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use iotlog::LoggingOptionsApi;
use iotlog::providers::aws::{AwsError, GetV2LoggingOptionsOutput, SetV2LoggingOptionsInput};

pub const ROLE_ARN: &str = "arn:aws:iam::123456789012:role/x";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Set(SetV2LoggingOptionsInput),
    Get,
}

/// In-memory stand-in for the IoT control plane.
#[derive(Default)]
pub struct FakeIot {
    remote: Mutex<Option<GetV2LoggingOptionsOutput>>,
    calls: Mutex<Vec<Call>>,
    get_error: Mutex<Option<(u16, String, String)>>,
    forget_after_set: Mutex<bool>,
    stored_on_set: Mutex<Option<GetV2LoggingOptionsOutput>>,
}

impl FakeIot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote(output: GetV2LoggingOptionsOutput) -> Self {
        let fake = Self::default();
        *fake.remote.lock().unwrap() = Some(output);
        fake
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_calls(&self) -> Vec<SetV2LoggingOptionsInput> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Set(input) => Some(input),
                Call::Get => None,
            })
            .collect()
    }

    pub fn remote(&self) -> Option<GetV2LoggingOptionsOutput> {
        self.remote.lock().unwrap().clone()
    }

    pub fn clear_remote(&self) {
        *self.remote.lock().unwrap() = None;
    }

    pub fn replace_remote(&self, output: GetV2LoggingOptionsOutput) {
        *self.remote.lock().unwrap() = Some(output);
    }

    pub fn fail_get_with(&self, status: u16, code: &str, message: &str) {
        *self.get_error.lock().unwrap() = Some((status, code.to_string(), message.to_string()));
    }

    /// Simulates the object vanishing between the write and the read-back.
    pub fn forget_after_set(&self) {
        *self.forget_after_set.lock().unwrap() = true;
    }

    /// Makes the remote store `output` on every Set instead of echoing the
    /// input, the way the service fills in defaults or canonicalizes values.
    pub fn store_on_set(&self, output: GetV2LoggingOptionsOutput) {
        *self.stored_on_set.lock().unwrap() = Some(output);
    }
}

#[async_trait]
impl LoggingOptionsApi for FakeIot {
    async fn set_v2_logging_options(
        &self,
        input: &SetV2LoggingOptionsInput,
    ) -> Result<(), AwsError> {
        self.calls.lock().unwrap().push(Call::Set(input.clone()));
        let stored = if *self.forget_after_set.lock().unwrap() {
            None
        } else if let Some(output) = self.stored_on_set.lock().unwrap().clone() {
            Some(output)
        } else {
            Some(GetV2LoggingOptionsOutput::from(input))
        };
        *self.remote.lock().unwrap() = stored;
        Ok(())
    }

    async fn get_v2_logging_options(&self) -> Result<GetV2LoggingOptionsOutput, AwsError> {
        self.calls.lock().unwrap().push(Call::Get);

        if let Some((status, code, message)) = self.get_error.lock().unwrap().clone() {
            return Err(AwsError::Api {
                status,
                code,
                message,
            });
        }

        self.remote.lock().unwrap().clone().ok_or_else(|| AwsError::Api {
            status: 404,
            code: "ResourceNotFoundException".to_string(),
            message: "V2 logging options are not configured".to_string(),
        })
    }
}

pub fn remote_output(role_arn: &str, level: &str, disable: Option<bool>) -> GetV2LoggingOptionsOutput {
    GetV2LoggingOptionsOutput {
        role_arn: Some(role_arn.to_string()),
        default_log_level: Some(level.to_string()),
        disable_all_logs: disable,
    }
}

/// Collects formatted log lines emitted on the current thread while the
/// returned guard is alive.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn start() -> (Self, tracing::subscriber::DefaultGuard) {
        let capture = Self::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();
        (capture, tracing::subscriber::set_default(subscriber))
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
