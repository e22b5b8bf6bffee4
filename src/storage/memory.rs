use crate::storage::metadata::{CertificateIssueRecord, Dataset, UserRecord};
use crate::storage::{CertificateIssuanceStore, UserStore};
use crate::utils::errors::{CertificateApiError, Result};
use async_trait::async_trait;
use ordermap::OrderMap;

/// In-memory user and issue tables
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: OrderMap<i64, UserRecord>,
    issues: Vec<CertificateIssueRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a dataset, rejecting duplicate users and orphaned issues.
    /// Issues are ordered by ascending id.
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        let mut store = Self::new();

        for user in dataset.users {
            if store.users.contains_key(&user.id) {
                return Err(CertificateApiError::Storage(format!(
                    "Duplicate user id {} in dataset",
                    user.id
                )));
            }
            store.users.insert(user.id, user);
        }

        let mut issues = dataset.issues;
        issues.sort_by_key(|issue| issue.id);
        for issue in issues {
            if !store.users.contains_key(&issue.userid) {
                return Err(CertificateApiError::Storage(format!(
                    "Certificate issue {} references unknown user {}",
                    issue.id, issue.userid
                )));
            }
            store.issues.push(issue);
        }

        tracing::debug!(
            "Loaded {} users and {} certificate issues",
            store.users.len(),
            store.issues.len()
        );
        Ok(store)
    }

    pub fn insert_user(&mut self, user: UserRecord) {
        self.users.insert(user.id, user);
    }

    pub fn insert_issue(&mut self, issue: CertificateIssueRecord) {
        self.issues.push(issue);
    }

    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.insert_user(user);
        self
    }

    pub fn with_issue(mut self, issue: CertificateIssueRecord) -> Self {
        self.insert_issue(issue);
        self
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn users(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.values()
    }

    /// Number of issues per user id
    pub fn issue_count_for(&self, userid: i64) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.userid == userid)
            .count()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>> {
        Ok(self.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        Ok(self.users.values().find(|user| user.email == email).cloned())
    }
}

#[async_trait]
impl CertificateIssuanceStore for MemoryStore {
    async fn find_all_by_user_id(&self, userid: i64) -> Result<Vec<CertificateIssueRecord>> {
        Ok(self
            .issues
            .iter()
            .filter(|issue| issue.userid == userid)
            .cloned()
            .collect())
    }
}
