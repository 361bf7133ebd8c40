//! Server configuration

use crate::cli::ServeArgs;
use biasio_classifiers::TopicCatalog;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Page title of the landing page
pub const DEFAULT_TITLE: &str =
    "Bias In, Bias Out: Understanding Discrimination in Conversational AI";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Topic catalog file; the built-in catalog when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Accept cross-origin requests from anywhere
    #[serde(default)]
    pub allow_any_origin: bool,

    /// Largest accepted request body
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Landing page title
    #[serde(default = "default_title")]
    pub title: String,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, args: &ServeArgs) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_yaml(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(listen) = &args.listen {
            config.listen = listen.clone();
        }

        if let Some(port) = args.port {
            config.port = port;
        }

        if let Some(catalog) = &args.catalog {
            config.catalog_path = Some(catalog.clone());
        }

        if args.allow_any_origin {
            config.allow_any_origin = true;
        }

        Ok(config)
    }

    /// Parse from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Address to bind
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.listen, self.port).parse()?)
    }

    /// Topic catalog selected by this configuration
    pub fn load_catalog(&self) -> biasio_core::Result<TopicCatalog> {
        match &self.catalog_path {
            Some(path) => TopicCatalog::from_file(path),
            None => TopicCatalog::builtin(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            catalog_path: None,
            allow_any_origin: false,
            max_body_bytes: default_max_body_bytes(),
            title: default_title(),
        }
    }
}

fn default_listen() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
