mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // Missing .env is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if config.contact.is_configured() {
        tracing::info!(from = %config.contact.from, "contact email delivery enabled");
    } else {
        tracing::warn!("RESEND_API_KEY or CONTACT_TO missing; contact form submissions will fail");
    }

    let port = config.port;
    let allow_origin = config.cors_allow_origin.clone();
    let state = state::AppState::from_config(config.contact);

    let app = match routes::app(state, &allow_origin) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, "portfolio listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
