use api::app;
use api::state::AppState;
use common::config::ServerConfig;
use common::logger::init_logging;
use feedback::FeedbackEngine;
use std::net::SocketAddr;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env();
    let _log_guard = init_logging(&config);

    if let Err(e) = run(config).await {
        error!(error = %e, "Server stopped");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> std::io::Result<()> {
    let addr = config
        .socket_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    info!(
        project = %config.project_name,
        env = %config.env,
        %addr,
        "Starting server"
    );

    let state = AppState::new(FeedbackEngine::new(), config);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(
        listener,
        app(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}
