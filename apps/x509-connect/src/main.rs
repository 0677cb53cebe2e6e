use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{check_health_detailed, connect_x509};
use tracing::{error, info};

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        ca_file = %config.mongodb.ca_file().display(),
        cert_key_file = %config.mongodb.cert_key_file().display(),
        timeout_ms = config.mongodb.server_selection_timeout.as_millis() as u64,
        "Connecting to MongoDB with X.509 authentication"
    );

    // One attempt; any failure ends the process before a session exists.
    let session = match connect_x509(&config.mongodb).await {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to connect to MongoDB: {}", e);
            return Err(e.into());
        }
    };

    let status = check_health_detailed(session.client()).await;
    info!(
        healthy = status.healthy,
        latency_ms = status.response_time_ms,
        "Connected to MongoDB"
    );

    session.disconnect().await;

    info!("x509-connect complete");
    Ok(())
}
