use aura::{AppConfig, Server};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    match Server::new(config).await {
        Ok(server) => {
            tracing::info!("listening on http://{}", server.addr());
            tracing::info!("POST /chat           - message in, reply plus optional action out");
            tracing::info!("POST /system-control - execute a resolved action");
            tracing::info!("GET  /health         - liveness");
            tracing::info!("GET  /               - static frontend");

            tokio::signal::ctrl_c().await.expect("install ctrl-c handler");
            tracing::info!("shutting down");
        }
        Err(error) => {
            eprintln!("failed to start server: {error}");
            std::process::exit(1);
        }
    }
}
