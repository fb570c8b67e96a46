//! EmailJS — thin HTTP client for the hosted transactional-email API.
//!
//! DESIGN
//! ======
//! Mirrors the browser SDK surface: `init` stores the public key once, then
//! `send` posts a template payload to `/email/send`. The key lives behind a
//! lock so setup and request handlers can share one client. No retries and
//! no request timeout; a hung call simply delays the answer.

pub mod types;

use std::sync::RwLock;

use types::{EmailJsError, EmailJsResponse, EmailSender, TemplateParams};

const SEND_PATH: &str = "/email/send";

// =============================================================================
// CLIENT
// =============================================================================

pub struct EmailJsClient {
    http: reqwest::Client,
    api_url: String,
    public_key: RwLock<Option<String>>,
}

impl EmailJsClient {
    /// Build an uninitialized client against `api_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_url: &str) -> Result<Self, EmailJsError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| EmailJsError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_url: api_url.trim_end_matches('/').to_string(), public_key: RwLock::new(None) })
    }

    /// Store the public key used for every subsequent send.
    pub fn init(&self, public_key: &str) {
        let mut guard = self
            .public_key
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(public_key.to_string());
    }

    #[must_use]
    pub fn public_key(&self) -> Option<String> {
        self.public_key
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn send_url(&self) -> String {
        format!("{}{SEND_PATH}", self.api_url)
    }
}

#[async_trait::async_trait]
impl EmailSender for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<EmailJsResponse, EmailJsError> {
        let Some(public_key) = self.public_key() else {
            return Err(EmailJsError::NotInitialized);
        };
        let body = build_request(&public_key, service_id, template_id, params);

        let response = self
            .http
            .post(self.send_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailJsError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| EmailJsError::Request(e.to_string()))?;

        parse_response(status, text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, serde::Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

fn build_request<'a>(
    public_key: &'a str,
    service_id: &'a str,
    template_id: &'a str,
    params: &'a TemplateParams,
) -> SendRequest<'a> {
    SendRequest { service_id, template_id, user_id: public_key, template_params: params }
}

/// Map a raw HTTP answer to the client result. Only 200 counts as delivered.
fn parse_response(status: u16, text: String) -> Result<EmailJsResponse, EmailJsError> {
    if status == 200 {
        Ok(EmailJsResponse { status, text })
    } else {
        Err(EmailJsError::Rejected { status, text })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
