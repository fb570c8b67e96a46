use super::*;
use crate::config::{ContactConfig, DEFAULT_EMAILJS_API_URL};
use crate::emailjs::types::{EmailJsError, EmailJsResponse, EmailSender, TemplateParams};
use axum::body::Body;
use axum::http::Request;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct RecordingSender {
    sent: Mutex<Vec<TemplateParams>>,
}

#[async_trait::async_trait]
impl EmailSender for RecordingSender {
    async fn send(
        &self,
        _service_id: &str,
        _template_id: &str,
        params: &TemplateParams,
    ) -> Result<EmailJsResponse, EmailJsError> {
        self.sent.lock().unwrap().push(params.clone());
        Ok(EmailJsResponse { status: 200, text: "OK".into() })
    }
}

fn test_app() -> (Router, Arc<RecordingSender>) {
    let sender = Arc::new(RecordingSender::default());
    let config = ContactConfig {
        public_key: Some("pk_1".into()),
        service_id: Some("service_1".into()),
        template_id: Some("template_1".into()),
        api_url: DEFAULT_EMAILJS_API_URL.into(),
    };
    (app(AppState::new(config, sender.clone())), sender)
}

#[tokio::test]
async fn post_contact_decodes_form_and_sends() {
    let (app, sender) = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=Alice&email=a%40x.com&message=Hi+there"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let sent = sender.sent.lock().unwrap().clone();
    assert_eq!(
        sent,
        vec![TemplateParams { from_name: "Alice".into(), from_email: "a@x.com".into(), message: "Hi there".into() }]
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("alert("));
    assert!(!html.contains("Alice"));
}

#[tokio::test]
async fn get_root_serves_form() {
    let (app, sender) = test_app();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(sender.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (app, _sender) = test_app();
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
