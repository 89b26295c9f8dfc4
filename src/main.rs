use anyhow::{Context, Result};
use ems_lite::api::RestClient;
use ems_lite::config::Config;
use ems_lite::logger::Logger;
use ems_lite::ui;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: invalid configuration: {:#}", e);
            eprintln!("\n💡 Check ./ems-lite.toml or ~/.config/ems-lite/config.toml,");
            eprintln!("   or point the app at a backend with EMS_API_URL=http://host:port");
            return Ok(());
        }
    };

    let logger = Logger::new();
    logger.install(&config.logging)?;
    log::info!("Using backend at {}", config.api.base_url);

    let client = RestClient::new(&config.api.base_url).context("Failed to create API client")?;

    ui::run_app(config, Arc::new(client), logger).await?;

    Ok(())
}
