//! Contact routes — render the form page and handle its submission.

use axum::extract::{Form, State};
use axum::response::Html;

use crate::notify::AlertNotifier;
use crate::services::contact::{ContactForm, FieldId, FormData};
use crate::state::AppState;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact.html");

#[must_use]
pub async fn show_form() -> Html<String> {
    Html(render_contact_page(&FormData::default(), &[]))
}

/// Posted pairs are applied as field edits in body order. Inputs the browser
/// omitted stay empty and fail the presence guard.
pub async fn submit_form(State(state): State<AppState>, Form(fields): Form<Vec<(String, String)>>) -> Html<String> {
    let mut form = ContactForm::new(state.config.clone());
    for (key, value) in fields {
        match key.parse::<FieldId>() {
            Ok(field) => form.on_field_change(field, value),
            Err(e) => tracing::debug!(error = %e, "ignoring posted field"),
        }
    }

    let notifier = AlertNotifier::new();
    let outcome = form.submit(state.mailer.as_ref(), &notifier).await;
    tracing::debug!(?outcome, "contact form submitted");

    Html(render_contact_page(form.data(), &notifier.take()))
}

// =============================================================================
// RENDERING
// =============================================================================

#[must_use]
pub fn render_contact_page(data: &FormData, notices: &[String]) -> String {
    CONTACT_TEMPLATE
        .replace("{{NAME}}", &escape_html(&data.name))
        .replace("{{EMAIL}}", &escape_html(&data.email))
        .replace("{{MESSAGE}}", &escape_html(&data.message))
        .replace("{{ALERTS}}", &render_alerts(notices))
}

/// One blocking `alert()` per notice, in order. Empty when there are none.
fn render_alerts(notices: &[String]) -> String {
    if notices.is_empty() {
        return String::new();
    }
    let calls = notices
        .iter()
        .map(|n| format!("alert({});", js_string_literal(n)))
        .collect::<String>();
    format!("<script>{calls}</script>")
}

fn js_string_literal(text: &str) -> String {
    // Closing-tag sequences must not end the surrounding <script> element.
    serde_json::Value::String(text.to_owned())
        .to_string()
        .replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Keeps visitor text from matching a later template placeholder.
            '{' => out.push_str("&#123;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
