#![recursion_limit = "256"]

mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(
        api = %config.console.api_base_url,
        idle_timeout_secs = config.console.idle_timeout.as_secs(),
        "console configuration loaded"
    );

    let port = config.port;
    let app = routes::app(config).expect("leptos configuration");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "admin console listening");
    axum::serve(listener, app).await.expect("server failed");
}
