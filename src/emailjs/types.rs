//! Shared types for the EmailJS client.

use serde::Serialize;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors produced by EmailJS client operations.
#[derive(Debug, thiserror::Error)]
pub enum EmailJsError {
    /// `send` was called before `init` supplied a public key.
    #[error("client not initialized: public key is required")]
    NotInitialized,

    #[error("API request failed: {0}")]
    Request(String),

    /// Non-200 answer from the service. `text` is the raw response body.
    #[error("API rejected request: status {status}: {text}")]
    Rejected { status: u16, text: String },

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// PAYLOAD
// =============================================================================

/// Template variables sent with every contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Successful answer from the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsResponse {
    pub status: u16,
    pub text: String,
}

// =============================================================================
// SENDER TRAIT
// =============================================================================

/// Async seam over the send call. Enables mocking in tests.
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver one message through a configured service and template.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailJsError`] if the client has no public key, the
    /// request fails in transport, or the service rejects it.
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<EmailJsResponse, EmailJsError>;
}
