use tracing_subscriber::EnvFilter;

use kongo::config::Config;
use kongo::{AdminClient, HttpTransport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    let transport = match config.timeout {
        Some(timeout) => HttpTransport::with_timeout(timeout)?,
        None => HttpTransport::new()?,
    };
    let kong = AdminClient::with_transport(&config.admin_url, transport);

    let endpoints = kong.list_endpoints().await?;
    tracing::info!("{} endpoints on {}", endpoints.len(), kong.base_url());

    for endpoint in endpoints {
        match endpoint.created() {
            Some(created) => tracing::info!(
                "{} ({}) => {} [created {}]",
                endpoint.name,
                endpoint.path,
                endpoint.target_url,
                created.to_rfc3339()
            ),
            None => tracing::info!("{} ({}) => {}", endpoint.name, endpoint.path, endpoint.target_url),
        }

        let plugins = kong.list_plugins(&endpoint.name).await?;
        for plugin in plugins {
            tracing::info!(
                "\t{} enabled={} {}",
                plugin.name,
                plugin.enabled,
                serde_json::Value::Object(plugin.config)
            );
        }
    }

    Ok(())
}
