pub mod local;
pub mod memory;
pub mod metadata;

use crate::utils::errors::Result;
use async_trait::async_trait;

pub use local::LocalStore;
pub use memory::MemoryStore;
pub use metadata::{CertificateIssueRecord, Dataset, UserRecord};

/// Read access to platform users
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>>;

    /// Exact, case-sensitive email match
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;
}

/// Read access to issued certificates
#[async_trait]
pub trait CertificateIssuanceStore: Send + Sync {
    /// All issues for a user, in the store's natural order
    async fn find_all_by_user_id(&self, userid: i64) -> Result<Vec<CertificateIssueRecord>>;
}
