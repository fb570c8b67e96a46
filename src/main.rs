mod config;
mod emailjs;
mod notify;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let port = config::parse_port(std::env::var("PORT").ok().as_deref()).expect("invalid PORT");
    let contact_config = config::ContactConfig::from_env();

    let client = emailjs::EmailJsClient::new(&contact_config.api_url).expect("EmailJS client build failed");

    // Missing key is non-fatal: submits still run and fail in the client.
    let mut setup = services::contact::MailerSetup::new();
    setup.apply(&client, contact_config.public_key.as_deref());

    let state = state::AppState::new(contact_config, Arc::new(client));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "contact form listening");
    axum::serve(listener, app).await.expect("server failed");
}
