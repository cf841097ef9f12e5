//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::xrpc::XrpcClient;

/// Shared application state available to all request handlers.
///
/// Immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Client for the XRPC lookup service.
    pub xrpc: XrpcClient,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let xrpc = XrpcClient::new(config.xrpc_root.clone())?;

        tracing::info!(xrpc_root = %xrpc.root(), "application state initialized");

        Ok(Self {
            xrpc,
            config: Arc::new(config),
        })
    }
}
