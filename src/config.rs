use crate::utils::errors::{CertificateApiError, Result};
use crate::utils::paths::CertificateApiPaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Service settings read from `config.yaml`; every field may be overridden on the command line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub bind_addr: Option<String>,
    #[serde(default)]
    pub data_file: Option<String>,
    #[serde(default)]
    pub wwwroot: Option<String>,
}

impl ServiceConfig {
    /// Load from a YAML file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CertificateApiError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let config: ServiceConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the default config file; a missing file yields defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Command-line values take precedence over file values
    pub fn merge(
        self,
        bind_addr: Option<String>,
        data_file: Option<String>,
        wwwroot: Option<String>,
    ) -> Self {
        Self {
            bind_addr: bind_addr.or(self.bind_addr),
            data_file: data_file.or(self.data_file),
            wwwroot: wwwroot.or(self.wwwroot),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let addr = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        addr.parse::<SocketAddr>().map_err(|e| {
            CertificateApiError::Config(format!("Invalid bind address '{addr}': {e}"))
        })
    }

    pub fn data_file(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => CertificateApiPaths::expand_home(path),
            None => CertificateApiPaths::dataset_file(),
        }
    }
}
