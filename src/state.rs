//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the read-only EmailJS configuration and the sender. Form state is
//! never shared: each submission builds its own `ContactForm`.

use std::sync::Arc;

use crate::config::ContactConfig;
use crate::emailjs::types::EmailSender;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ContactConfig>,
    pub mailer: Arc<dyn EmailSender>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ContactConfig, mailer: Arc<dyn EmailSender>) -> Self {
        Self { config: Arc::new(config), mailer }
    }
}
