use std::time::Duration;
use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables of the contact form workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    pub form_id: String,
    /// How long success/error banners stay on screen.
    pub banner_timeout: Duration,
    /// Fixed latency of the mock send operation.
    pub send_delay: Duration,
    /// Live region text is cleared after this.
    pub announcement_clear: Duration,
    /// Character counters switch to the warning state above this usage ratio.
    pub counter_warning_ratio: f64,
    pub submit_label: String,
    pub busy_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".to_string(),
            banner_timeout: Duration::from_secs(5),
            send_delay: Duration::from_millis(1500),
            announcement_clear: Duration::from_secs(1),
            counter_warning_ratio: 0.9,
            submit_label: "Send message".to_string(),
            busy_label: "Sending...".to_string(),
        }
    }
}

pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";
