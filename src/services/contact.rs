//! Contact form service — field state, submit guards, delivery branch.
//!
//! DESIGN
//! ======
//! `ContactForm` owns one `FormData` record. Edits land one field at a time
//! with no validation. Submission runs in two halves: `prepare_submit` applies
//! the presence and configuration guards and yields a `SendRequest`, and
//! `complete_submit` takes the remote result and either clears the form or
//! leaves it for a retry. `submit` chains both around a single send.
//!
//! There is no in-flight guard. Preparing twice before completing yields two
//! independent requests, the same as a double click on a browser form.

use std::str::FromStr;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::ContactConfig;
use crate::emailjs::EmailJsClient;
use crate::emailjs::types::{EmailJsError, EmailJsResponse, EmailSender, TemplateParams};
use crate::notify::{self, Notifier};

// =============================================================================
// FIELDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct FieldIdError(pub String);

impl FromStr for FieldId {
    type Err = FieldIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(FieldIdError(other.to_string())),
        }
    }
}

/// The three-field record the visitor is editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        FieldId::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    fn to_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was empty. Nothing was sent.
    MissingFields,
    /// Service or template id absent. Nothing was sent.
    MissingConfiguration,
    Sent,
    Failed,
}

/// One outbound send, built from a snapshot of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub id: Uuid,
    pub service_id: String,
    pub template_id: String,
    pub params: TemplateParams,
}

impl SendRequest {
    /// Issue the remote call. Exactly one request per invocation.
    ///
    /// # Errors
    ///
    /// Propagates the sender's error unchanged.
    pub async fn dispatch(&self, sender: &dyn EmailSender) -> Result<EmailJsResponse, EmailJsError> {
        tracing::debug!(submission_id = %self.id, service_id = %self.service_id, "sending contact message");
        sender
            .send(&self.service_id, &self.template_id, &self.params)
            .await
    }
}

// =============================================================================
// CONTACT FORM
// =============================================================================

pub struct ContactForm {
    data: FormData,
    config: Arc<ContactConfig>,
}

impl ContactForm {
    #[must_use]
    pub fn new(config: Arc<ContactConfig>) -> Self {
        Self { data: FormData::default(), config }
    }

    #[must_use]
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Overwrite exactly one field. No validation happens here.
    pub fn on_field_change(&mut self, field: FieldId, value: impl Into<String>) {
        *self.data.slot(field) = value.into();
    }

    /// Run the submit guards and build the outbound request.
    ///
    /// # Errors
    ///
    /// Returns the blocking outcome after notifying the user when a field is
    /// empty or the delivery target is not configured.
    pub fn prepare_submit(&self, notifier: &dyn Notifier) -> Result<SendRequest, SubmitOutcome> {
        if !self.data.is_complete() {
            notifier.notify(notify::FILL_ALL_FIELDS);
            return Err(SubmitOutcome::MissingFields);
        }

        let Some((service_id, template_id)) = self.config.delivery_target() else {
            tracing::error!(
                service_id = self.config.service_id.is_some(),
                template_id = self.config.template_id.is_some(),
                "EmailJS service ID or template ID is not defined; check EMAILJS_SERVICE_ID and EMAILJS_TEMPLATE_ID"
            );
            notifier.notify(notify::MISSING_CONFIGURATION);
            return Err(SubmitOutcome::MissingConfiguration);
        };

        Ok(SendRequest {
            id: Uuid::new_v4(),
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            params: self.data.to_params(),
        })
    }

    /// Apply the remote result: clear on success, keep input on failure.
    pub fn complete_submit(
        &mut self,
        request: &SendRequest,
        result: Result<EmailJsResponse, EmailJsError>,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome {
        match result {
            Ok(response) => {
                tracing::info!(
                    submission_id = %request.id,
                    status = response.status,
                    text = %response.text,
                    "contact message sent"
                );
                notifier.notify(notify::SEND_SUCCEEDED);
                self.data = FormData::default();
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!(submission_id = %request.id, error = %e, "failed to send contact message");
                notifier.notify(notify::SEND_FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn submit(&mut self, sender: &dyn EmailSender, notifier: &dyn Notifier) -> SubmitOutcome {
        let request = match self.prepare_submit(notifier) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = request.dispatch(sender).await;
        self.complete_submit(&request, result, notifier)
    }
}

// =============================================================================
// CLIENT SETUP
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    Initialized,
    /// Same key as the last successful setup; client left as is.
    Unchanged,
    /// No key supplied; client left uninitialized.
    MissingKey,
}

/// Explicit one-time client initialization, repeated only when the key changes.
#[derive(Debug, Default)]
pub struct MailerSetup {
    applied: Option<String>,
}

impl MailerSetup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, client: &EmailJsClient, public_key: Option<&str>) -> SetupOutcome {
        let Some(key) = public_key.filter(|k| !k.is_empty()) else {
            tracing::error!("EmailJS public key is not defined; check EMAILJS_PUBLIC_KEY");
            return SetupOutcome::MissingKey;
        };
        if self.applied.as_deref() == Some(key) {
            return SetupOutcome::Unchanged;
        }
        client.init(key);
        self.applied = Some(key.to_string());
        tracing::info!("EmailJS client initialized");
        SetupOutcome::Initialized
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
