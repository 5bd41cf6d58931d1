//! ba-server: serves every resource over REST
//!
//! Configuration comes from `config/ba.yaml` (or the file named by
//! `BA_CONFIG`) with environment overrides, see [`ba::config`].

use ba::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let stores = StoreFactory::from_config(&config.storage).await?;
    tracing::info!(backend = stores.backend_name(), "storage ready");

    let addr = config.listen_addr();
    ServerBuilder::new()
        .with_config(config)
        .with_stores(stores)
        .register_module(BaModule)?
        .serve(&addr)
        .await
}
