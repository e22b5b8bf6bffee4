use crate::cert::result::CertificateUrlResult;
use crate::cert::url::CertificateUrlBuilder;
use crate::storage::{CertificateIssuanceStore, UserRecord, UserStore};
use crate::utils::errors::{CertificateApiError, Result};
use serde::Deserialize;
use std::sync::Arc;

const BOTH_IDENTIFIERS_MESSAGE: &str =
    "Both userid and useremail cannot be provided at the same time. Please provide only one.";
const NO_IDENTIFIER_MESSAGE: &str = "Either userid or useremail must be provided.";
const UNKNOWN_USER_MESSAGE: &str = "Invalid user ID or email.";

/// Raw request parameters; `userid == 0` and an empty email both mean "not provided"
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertificateUrlParams {
    #[serde(default)]
    pub userid: i64,
    #[serde(default)]
    pub useremail: Option<String>,
}

/// Which field identifies the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookupKey {
    Id(i64),
    Email(String),
}

impl UserLookupKey {
    /// Exactly one of a non-zero id or a non-empty email must be given
    pub fn from_params(userid: i64, useremail: Option<&str>) -> Result<Self> {
        let email = useremail.filter(|email| !email.is_empty());

        match (userid, email) {
            (0, None) => Err(CertificateApiError::InvalidParameter(
                NO_IDENTIFIER_MESSAGE.to_string(),
            )),
            (0, Some(email)) => Ok(Self::Email(email.to_string())),
            (_, Some(_)) => Err(CertificateApiError::InvalidParameter(
                BOTH_IDENTIFIERS_MESSAGE.to_string(),
            )),
            (id, None) if id < 0 => Err(CertificateApiError::InvalidParameter(
                UNKNOWN_USER_MESSAGE.to_string(),
            )),
            (id, None) => Ok(Self::Id(id)),
        }
    }
}

/// Resolves a user's issued certificates to download URLs
#[derive(Clone)]
pub struct CertificateLookupService {
    users: Arc<dyn UserStore>,
    issues: Arc<dyn CertificateIssuanceStore>,
    urls: CertificateUrlBuilder,
}

impl CertificateLookupService {
    pub fn new(
        users: Arc<dyn UserStore>,
        issues: Arc<dyn CertificateIssuanceStore>,
        urls: CertificateUrlBuilder,
    ) -> Self {
        Self {
            users,
            issues,
            urls,
        }
    }

    /// Use one store for both users and issues
    pub fn from_store<S>(store: Arc<S>, urls: CertificateUrlBuilder) -> Self
    where
        S: UserStore + CertificateIssuanceStore + 'static,
    {
        Self::new(store.clone(), store, urls)
    }

    pub fn url_builder(&self) -> &CertificateUrlBuilder {
        &self.urls
    }

    pub async fn get_certificate_urls(
        &self,
        userid: i64,
        useremail: Option<&str>,
    ) -> Result<CertificateUrlResult> {
        let key = UserLookupKey::from_params(userid, useremail)?;
        let user = self.resolve_user(&key).await?;

        let issues = self.issues.find_all_by_user_id(user.id).await?;
        if issues.is_empty() {
            tracing::debug!("User {} has no certificate issues", user.id);
            return Ok(CertificateUrlResult::no_certificates());
        }

        let lastaccess = user.lastaccess;
        let certificate_urls: Vec<String> = issues
            .iter()
            .map(|issue| self.urls.issue_url(lastaccess, &issue.code))
            .collect();

        tracing::info!(
            "Resolved {} certificate URLs for user {}",
            certificate_urls.len(),
            user.id
        );
        Ok(CertificateUrlResult::success(certificate_urls))
    }

    pub async fn lookup(&self, params: &CertificateUrlParams) -> Result<CertificateUrlResult> {
        self.get_certificate_urls(params.userid, params.useremail.as_deref())
            .await
    }

    async fn resolve_user(&self, key: &UserLookupKey) -> Result<UserRecord> {
        let user = match key {
            UserLookupKey::Id(id) => {
                tracing::debug!("Looking up user by id {}", id);
                self.users.find_by_id(*id).await?
            }
            UserLookupKey::Email(email) => {
                tracing::debug!("Looking up user by email");
                self.users.find_by_email(email).await?
            }
        };

        // Same error for both paths so callers cannot tell which field missed
        user.ok_or_else(|| CertificateApiError::InvalidParameter(UNKNOWN_USER_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CertificateIssueRecord, MemoryStore};
    use async_trait::async_trait;

    fn service() -> CertificateLookupService {
        let store = MemoryStore::new()
            .with_user(UserRecord::new(5, "learner@example.org", 1690000000))
            .with_user(UserRecord::new(6, "fresh@example.org", 1700000000))
            .with_issue(CertificateIssueRecord::new(1, 5, "X1"))
            .with_issue(CertificateIssueRecord::new(2, 5, "X2"));
        CertificateLookupService::from_store(Arc::new(store), CertificateUrlBuilder::new())
    }

    #[test]
    fn test_lookup_key_from_params() {
        assert_eq!(
            UserLookupKey::from_params(5, None).unwrap(),
            UserLookupKey::Id(5)
        );
        assert_eq!(
            UserLookupKey::from_params(0, Some("a@example.org")).unwrap(),
            UserLookupKey::Email("a@example.org".to_string())
        );
        // Empty email counts as absent
        assert_eq!(
            UserLookupKey::from_params(5, Some("")).unwrap(),
            UserLookupKey::Id(5)
        );
    }

    #[tokio::test]
    async fn test_success_by_id() {
        let result = service().get_certificate_urls(5, None).await.unwrap();
        assert_eq!(
            result,
            CertificateUrlResult::success(vec![
                "/pluginfile.php/1/tool_certificate/issues/1690000000/X1.pdf".to_string(),
                "/pluginfile.php/1/tool_certificate/issues/1690000000/X2.pdf".to_string(),
            ])
        );
    }

    #[tokio::test]
    async fn test_success_by_email() {
        let result = service()
            .get_certificate_urls(0, Some("learner@example.org"))
            .await
            .unwrap();
        assert!(result.is_success());
        assert_eq!(result.certificate_urls().len(), 2);
    }

    #[tokio::test]
    async fn test_both_identifiers_rejected() {
        let err = service()
            .get_certificate_urls(5, Some("learner@example.org"))
            .await
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(err.message(), BOTH_IDENTIFIERS_MESSAGE);
    }

    #[tokio::test]
    async fn test_no_identifier_rejected() {
        for email in [None, Some("")] {
            let err = service().get_certificate_urls(0, email).await.unwrap_err();
            assert!(err.is_invalid_parameter());
            assert_eq!(err.message(), NO_IDENTIFIER_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_unknown_user_uniform_error() {
        let by_id = service().get_certificate_urls(404, None).await.unwrap_err();
        let by_email = service()
            .get_certificate_urls(0, Some("nobody@example.org"))
            .await
            .unwrap_err();
        let negative = service().get_certificate_urls(-3, None).await.unwrap_err();

        for err in [by_id, by_email, negative] {
            assert!(err.is_invalid_parameter());
            assert_eq!(err.message(), UNKNOWN_USER_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_no_certificates_is_not_a_failure() {
        let result = service().get_certificate_urls(6, None).await.unwrap();
        assert_eq!(result, CertificateUrlResult::no_certificates());
        assert_eq!(
            result.message(),
            Some("The user has not completed any courses yet.")
        );
    }

    #[tokio::test]
    async fn test_lookup_params_with_wwwroot() {
        let store = Arc::new(
            MemoryStore::new()
                .with_user(UserRecord::new(9, "x@example.org", 1700000000))
                .with_issue(CertificateIssueRecord::new(1, 9, "ABC123")),
        );
        let service = CertificateLookupService::from_store(
            store,
            CertificateUrlBuilder::with_wwwroot("https://lms.example.org"),
        );
        let result = service
            .lookup(&CertificateUrlParams {
                userid: 0,
                useremail: Some("x@example.org".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(
            result.certificate_urls(),
            ["https://lms.example.org/pluginfile.php/1/tool_certificate/issues/1700000000/ABC123.pdf"]
        );
    }

    struct FailingIssues;

    #[async_trait]
    impl CertificateIssuanceStore for FailingIssues {
        async fn find_all_by_user_id(&self, _userid: i64) -> Result<Vec<CertificateIssueRecord>> {
            Err(CertificateApiError::Storage("issue table unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let users = Arc::new(
            MemoryStore::new().with_user(UserRecord::new(5, "learner@example.org", 1)),
        );
        let service =
            CertificateLookupService::new(users, Arc::new(FailingIssues), CertificateUrlBuilder::new());
        let err = service.get_certificate_urls(5, None).await.unwrap_err();
        assert!(matches!(err, CertificateApiError::Storage(_)));
    }
}
