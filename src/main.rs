use std::sync::Arc;

use anyhow::Result;
use skycast::config::LoggingConfig;
use skycast::{AppState, OpenWeatherMapProvider, SkycastConfig, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = SkycastConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!(version = skycast::VERSION, "Starting skycast");

    let provider = Arc::new(OpenWeatherMapProvider::new(config.provider.clone())?);
    let state = AppState::new(provider, config.report.clone());

    web::run(&config, state).await
}

/// Install the global tracing subscriber per the logging config.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
