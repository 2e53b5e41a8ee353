// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use gemini_client::GeminiClient;
use letters_core::kernel::{GeminiChat, SendGridMailer, ServerDeps};
use letters_core::server::build_app;
use letters_core::Config;
use sendgrid::SendGridClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,letters_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Event Letters API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Build the dependency bundle once; everything downstream borrows it
    let mailer = SendGridMailer::new(
        SendGridClient::new(config.sendgrid_api_key),
        config.sender_email,
    );
    let chat_model = GeminiChat::new(GeminiClient::new(config.gemini_api_key));
    let deps = Arc::new(ServerDeps::new(Arc::new(mailer), Arc::new(chat_model)));

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
