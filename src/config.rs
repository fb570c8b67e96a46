//! Contact form configuration parsed from environment variables.
//!
//! All three EmailJS identifiers are optional at load time. A missing value
//! is a configuration error surfaced at setup or submit, never at startup.

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactConfig {
    pub public_key: Option<String>,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub api_url: String,
}

impl ContactConfig {
    /// Build config from the process environment.
    ///
    /// - `EMAILJS_PUBLIC_KEY`
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_API_URL`: defaults to the public EmailJS endpoint
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Empty values count as unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| non_empty(lookup(key));
        let api_url = read("EMAILJS_API_URL")
            .unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            public_key: read("EMAILJS_PUBLIC_KEY"),
            service_id: read("EMAILJS_SERVICE_ID"),
            template_id: read("EMAILJS_TEMPLATE_ID"),
            api_url,
        }
    }

    /// Service and template ids, when both are configured.
    #[must_use]
    pub fn delivery_target(&self) -> Option<(&str, &str)> {
        match (self.service_id.as_deref(), self.template_id.as_deref()) {
            (Some(service), Some(template)) => Some((service, template)),
            _ => None,
        }
    }
}

/// Parse `PORT`, falling back to the default when unset.
///
/// # Errors
///
/// Returns the raw value if it is set but not a valid port number.
pub fn parse_port(raw: Option<&str>) -> Result<u16, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| value.to_string()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
