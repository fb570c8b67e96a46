//! User-facing notifications.
//!
//! The form never talks to a UI directly. It reports through [`Notifier`];
//! the web page turns collected notices into blocking `alert()` calls.

use std::sync::Mutex;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const MISSING_CONFIGURATION: &str = "Email sending failed due to missing configuration.";
pub const SEND_SUCCEEDED: &str = "Email sent successfully!";
pub const SEND_FAILED: &str = "Failed to send email. Please try again later.";

pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

// =============================================================================
// ALERT NOTIFIER
// =============================================================================

/// Collects notices in arrival order for rendering as browser alerts.
#[derive(Debug, Default)]
pub struct AlertNotifier {
    notices: Mutex<Vec<String>>,
}

impl AlertNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the collected notices.
    #[must_use]
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(std::sync::PoisonError::into_inner))
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
