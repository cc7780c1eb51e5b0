use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::timer::Timer;

/// Flat field name → value mapping handed to the send operation.
pub type FormData = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("{0}")]
    Backend(String),
    #[error("unexpected send failure")]
    Unexpected(Option<String>),
}

impl SendError {
    /// The message worth showing to the user, if the failure carried one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            SendError::Backend(msg) => Some(msg.as_str()).filter(|m| !m.trim().is_empty()),
            SendError::Unexpected(msg) => msg.as_deref().filter(|m| !m.trim().is_empty()),
        }
    }
}

/// Delivers collected form data to wherever submissions go.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait SendOperation {
    async fn send(&self, data: &FormData) -> Result<SubmissionResult, SendError>;
}

pub const REQUIRED_KEYS: [&str; 3] = ["name", "email", "message"];
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent.";

/// Stand-in backend: waits a fixed delay, then accepts anything that carries
/// the name, email and message keys.
pub struct MockSender {
    timer: Rc<dyn Timer>,
    delay: Duration,
}

impl MockSender {
    pub fn new(timer: Rc<dyn Timer>, delay: Duration) -> Self {
        Self { timer, delay }
    }
}

#[async_trait(?Send)]
impl SendOperation for MockSender {
    async fn send(&self, data: &FormData) -> Result<SubmissionResult, SendError> {
        debug!("mock send of {} fields", data.len());
        self.timer.sleep(self.delay).await;

        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| data.get(*key).map_or(true, |v| v.is_empty()))
            .collect();
        if !missing.is_empty() {
            info!("mock send rejected, missing {:?}", missing);
            return Ok(SubmissionResult::failed(MISSING_FIELDS_MESSAGE));
        }

        Ok(SubmissionResult::ok(SENT_MESSAGE))
    }
}
