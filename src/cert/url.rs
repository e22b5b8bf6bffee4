/// Path under which the host platform serves issued certificate files
pub const CERTIFICATE_ISSUES_PATH: &str = "/pluginfile.php/1/tool_certificate/issues/";

/// Renders certificate file URLs, optionally against the site root
#[derive(Debug, Clone, Default)]
pub struct CertificateUrlBuilder {
    wwwroot: Option<String>,
}

impl CertificateUrlBuilder {
    /// Relative URLs only
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute URLs under `wwwroot` (e.g. "https://lms.example.org")
    pub fn with_wwwroot(wwwroot: impl Into<String>) -> Self {
        let wwwroot = wwwroot.into();
        let trimmed = wwwroot.trim_end_matches('/');
        Self {
            wwwroot: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn from_config(wwwroot: Option<&str>) -> Self {
        match wwwroot {
            Some(root) => Self::with_wwwroot(root),
            None => Self::new(),
        }
    }

    pub fn wwwroot(&self) -> Option<&str> {
        self.wwwroot.as_deref()
    }

    /// `/pluginfile.php/1/tool_certificate/issues/{lastaccess}/{code}.pdf`
    pub fn issue_path(lastaccess: i64, code: &str) -> String {
        format!("{CERTIFICATE_ISSUES_PATH}{lastaccess}/{code}.pdf")
    }

    pub fn issue_url(&self, lastaccess: i64, code: &str) -> String {
        let path = Self::issue_path(lastaccess, code);
        match &self.wwwroot {
            Some(root) => format!("{root}{path}"),
            None => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_path() {
        assert_eq!(
            CertificateUrlBuilder::issue_path(1700000000, "ABC123"),
            "/pluginfile.php/1/tool_certificate/issues/1700000000/ABC123.pdf"
        );
    }

    #[test]
    fn test_relative_url_by_default() {
        let builder = CertificateUrlBuilder::new();
        assert_eq!(builder.wwwroot(), None);
        assert_eq!(
            builder.issue_url(1690000000, "X1"),
            "/pluginfile.php/1/tool_certificate/issues/1690000000/X1.pdf"
        );
    }

    #[test]
    fn test_absolute_url_with_wwwroot() {
        let builder = CertificateUrlBuilder::with_wwwroot("https://lms.example.org/");
        assert_eq!(
            builder.issue_url(1690000000, "X1"),
            "https://lms.example.org/pluginfile.php/1/tool_certificate/issues/1690000000/X1.pdf"
        );
    }

    #[test]
    fn test_empty_wwwroot_is_relative() {
        let builder = CertificateUrlBuilder::from_config(Some("/"));
        assert_eq!(builder.wwwroot(), None);
    }
}
