use anyhow::Context;
use api::{
    Config, build,
    store::UserStore,
    telemetry::{get_subscriber, init_subscriber},
};

/// User service
///
/// Environment variables can be set directly or loaded from a .env file in the project root.
///
/// Optional environment variables:
/// - IP_ADDRESS: Server bind address (default 127.0.0.1; 0.0.0.0 for public)
/// - PORT: Server port (default 8000)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin in development, or comma-separated list for production)
///
/// Example .env file:
/// IP_ADDRESS=127.0.0.1
/// PORT=8000
/// ALLOWED_ORIGINS=*
///
/// The service starts with an empty user table; use `cargo run -p dev-server`
/// for a seeded instance.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if available
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = Config::from_env()?;

    let server = build(&mut config, UserStore::new())
        .await
        .context("Failed to bind server")?;
    tracing::info!("Listening on http://{}:{}", config.ip, config.port);
    server.await.context("Server error")
}
