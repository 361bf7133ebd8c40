use crate::config::ServerConfig;
use biasio_classifiers::ResponseComposer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Response composer; immutable, shared across requests without locking
    pub composer: Arc<ResponseComposer>,

    /// Prometheus recorder handle, when one is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Load the configured catalog and build the composer
    pub fn new(config: ServerConfig) -> biasio_core::Result<Self> {
        let composer = ResponseComposer::new(config.load_catalog()?)?;

        Ok(Self {
            config: Arc::new(config),
            composer: Arc::new(composer),
            metrics: None,
        })
    }

    /// Attach a Prometheus handle for the metrics endpoint
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
