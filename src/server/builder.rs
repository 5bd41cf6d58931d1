//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use super::resource_registry::ResourceRegistry;
use crate::config::AppConfig;
use crate::core::manager::ResourceManager;
use crate::core::module::Module;
use crate::core::resource::Resource;
use crate::storage::StoreFactory;
use anyhow::{Result, bail};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating HTTP servers with auto-registered routes
///
/// Stores are created when a module registers, so `with_stores` must be
/// called before `register_module`.
///
/// # Example
///
/// ```ignore
/// let stores = StoreFactory::from_config(&config.storage).await?;
/// ServerBuilder::new()
///     .with_config(config)
///     .with_stores(stores)
///     .register_module(BaModule)?
///     .serve("127.0.0.1:8080")
///     .await?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    stores: StoreFactory,
    registry: ResourceRegistry,
    modules: Vec<Arc<dyn Module>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a builder with default configuration and in-memory stores
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            stores: StoreFactory::default(),
            registry: ResourceRegistry::new(),
            modules: Vec::new(),
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the store factory used by modules registered afterwards
    pub fn with_stores(mut self, stores: StoreFactory) -> Self {
        self.stores = stores;
        self
    }

    /// Add routes that don't fit the CRUD pattern
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register a module and every resource it declares
    pub fn register_module(mut self, module: impl Module + 'static) -> Result<Self> {
        let module = Arc::new(module);
        module.register_resources(&mut self.registry, &self.stores)?;

        tracing::info!(
            module = module.name(),
            version = module.version(),
            resources = module.resource_names().len(),
            backend = self.stores.backend_name(),
            "registered module"
        );

        self.modules.push(module);
        Ok(self)
    }

    /// Register a single manager outside any module
    pub fn register_manager<T: Resource>(mut self, manager: ResourceManager<T>) -> Result<Self> {
        self.registry.register_manager(manager)?;
        Ok(self)
    }

    /// Build the transport-agnostic host
    pub fn build_host(self) -> Result<ServerHost> {
        if self.registry.is_empty() {
            bail!("no resources registered. Call .register_module() first");
        }
        Ok(ServerHost::new(
            self.config,
            self.registry,
            self.stores.backend_name(),
        ))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown on SIGTERM or Ctrl+C
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
