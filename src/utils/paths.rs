use crate::utils::errors::{CertificateApiError, Result};
use std::path::PathBuf;

pub struct CertificateApiPaths;
const PROGRAM_NAME: &str = "certificate-api";

impl CertificateApiPaths {
    /// Get the base data directory: ~/.local/share/certificate-api/
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|dir| dir.join(PROGRAM_NAME))
            .ok_or_else(|| {
                CertificateApiError::Config("Cannot determine local data directory".to_string())
            })
    }

    /// Get the config directory: ~/.config/certificate-api/
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(PROGRAM_NAME))
            .ok_or_else(|| {
                CertificateApiError::Config("Cannot determine config directory".to_string())
            })
    }

    /// Get the default config file: ~/.config/certificate-api/config.yaml
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Get the default dataset file: ~/.local/share/certificate-api/dataset.yaml
    pub fn dataset_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("dataset.yaml"))
    }

    /// Expand a leading `~/` to the home directory
    pub fn expand_home(path: &str) -> Result<PathBuf> {
        match path.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .ok_or_else(|| {
                    CertificateApiError::Config("Cannot determine home directory".to_string())
                }),
            None => Ok(PathBuf::from(path)),
        }
    }
}
