use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coldstore_api::config::ServerConfig;
use coldstore_api::router::build_app_router;
use coldstore_api::state::AppState;
use coldstore_events::{AlertDispatcher, AlertMailer, DisabledMailer, SmtpMailer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "coldstore_api=debug,coldstore_events=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        recipients = config.recipients.len(),
        "Loaded server configuration"
    );

    // --- Mailer ---
    let mailer: Arc<dyn AlertMailer> = match &config.email {
        Some(email) => {
            let smtp = SmtpMailer::new(email).expect("Invalid SMTP configuration");
            tracing::info!(smtp_host = %email.smtp_host, smtp_port = email.smtp_port, "SMTP mailer configured");
            Arc::new(smtp)
        }
        None => {
            tracing::warn!("SMTP_HOST not set, alert emails will only be logged");
            Arc::new(DisabledMailer)
        }
    };

    // --- App state ---
    let dispatcher = AlertDispatcher::new(mailer, config.recipients.clone());
    let state = AppState {
        dispatcher: Arc::new(dispatcher),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or (on Unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
