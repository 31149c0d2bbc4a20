//! Development server for the user service
//!
//! Starts the service on an OS-assigned port with the seeded user dataset,
//! then drives a ResourceLoader against it for each target given on the
//! command line (or a default set), logging every published state.
//!
//! Usage: cargo run -p dev-server [target...]
//!
//! REQUEST_TIMEOUT_SECS is read from the environment or a .env file.

use anyhow::Result;
use loader::{FetchState, HttpTransport, ResourceLoader, TransportConfig};
use serde_json::Value;
use tracing::info;

const DEFAULT_TARGETS: &[&str] = &["/users/42", "/users/999", "/users"];

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber);

    info!("🚀 Starting development server");
    let app = test_helpers::spawn_app().await;
    info!("✅ API server running on {}", app.address());
    test_helpers::mock::print_summary(&test_helpers::mock::users());

    let config = TransportConfig {
        base_url: app.api_base(),
        ..TransportConfig::from_env()?
    };
    let transport = HttpTransport::from_config(&config)?;
    let loader: ResourceLoader<_, _, Value> =
        ResourceLoader::new(transport, log_state);

    let targets: Vec<String> = std::env::args().skip(1).collect();
    let targets = if targets.is_empty() {
        DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect()
    } else {
        targets
    };
    for target in &targets {
        info!("📡 Loading {target}");
        loader.load(target).await;
    }

    info!("🎯 Development server ready!");
    info!("   API: {}", app.api_base());
    info!("👋 Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}

fn log_state(state: FetchState<Value>) {
    match state {
        FetchState::Pending => info!("   ⏳ pending"),
        FetchState::Success { payload } => info!("   ✅ {payload}"),
        FetchState::Failure { message } => {
            api::telemetry::log_error(anyhow::anyhow!(message))
        }
    }
}
