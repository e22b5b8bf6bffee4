use crate::storage::memory::MemoryStore;
use crate::storage::metadata::{CertificateIssueRecord, Dataset, UserRecord};
use crate::storage::{CertificateIssuanceStore, UserStore};
use crate::utils::errors::{CertificateApiError, Result};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Store backed by a dataset file exported from the host platform
pub struct LocalStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl LocalStore {
    /// Load a `.yaml`/`.yml` or `.json` dataset
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(CertificateApiError::Storage(format!(
                "Dataset file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let dataset = Self::parse(&path, &content)?;
        let inner = MemoryStore::from_dataset(dataset)?;

        tracing::info!(
            "Loaded dataset {} ({} users, {} certificate issues)",
            path.display(),
            inner.user_count(),
            inner.issue_count()
        );
        Ok(Self { path, inner })
    }

    fn parse(path: &Path, content: &str) -> Result<Dataset> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(serde_json::from_str(content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(content)?),
            other => Err(CertificateApiError::Storage(format!(
                "Unsupported dataset format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &MemoryStore {
        &self.inner
    }
}

#[async_trait]
impl UserStore for LocalStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        self.inner.find_by_email(email).await
    }
}

#[async_trait]
impl CertificateIssuanceStore for LocalStore {
    async fn find_all_by_user_id(&self, userid: i64) -> Result<Vec<CertificateIssueRecord>> {
        self.inner.find_all_by_user_id(userid).await
    }
}
