use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform user as seen by the certificate lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    /// Epoch seconds
    #[serde(default)]
    pub lastaccess: i64,
}

impl UserRecord {
    pub fn new(id: i64, email: impl Into<String>, lastaccess: i64) -> Self {
        Self {
            id,
            email: email.into(),
            lastaccess,
        }
    }

    pub fn last_access_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.lastaccess, 0)
    }
}

/// One issued certificate belonging to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateIssueRecord {
    #[serde(default)]
    pub id: i64,
    pub userid: i64,
    pub code: String,
}

impl CertificateIssueRecord {
    pub fn new(id: i64, userid: i64, code: impl Into<String>) -> Self {
        Self {
            id,
            userid,
            code: code.into(),
        }
    }
}

/// Dataset file layout exported from the host platform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub issues: Vec<CertificateIssueRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_access_at() {
        let user = UserRecord::new(5, "learner@example.org", 1690000000);
        let at = user.last_access_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2023-07-22T04:26:40+00:00");
    }

    #[test]
    fn test_dataset_defaults_missing_sections() {
        let dataset: Dataset = serde_yaml::from_str("users: []\n").unwrap();
        assert!(dataset.users.is_empty());
        assert!(dataset.issues.is_empty());
    }

    #[test]
    fn test_issue_record_from_yaml() {
        let yaml = "users:\n  - id: 5\n    email: a@example.org\n    lastaccess: 10\nissues:\n  - id: 3\n    userid: 5\n    code: X1\n";
        let dataset: Dataset = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(dataset.users[0], UserRecord::new(5, "a@example.org", 10));
        assert_eq!(dataset.issues[0], CertificateIssueRecord::new(3, 5, "X1"));
    }
}
