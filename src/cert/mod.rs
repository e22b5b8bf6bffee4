pub mod lookup;
pub mod result;
pub mod url;

pub use lookup::{CertificateLookupService, CertificateUrlParams, UserLookupKey};
pub use result::{CertificateUrlResult, NO_CERTIFICATES_MESSAGE};
pub use url::{CertificateUrlBuilder, CERTIFICATE_ISSUES_PATH};
