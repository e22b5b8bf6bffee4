pub mod cert;
pub mod cli;
pub mod config;
pub mod server;
pub mod storage;
pub mod utils;

pub use cert::{
    CertificateLookupService, CertificateUrlBuilder, CertificateUrlParams, CertificateUrlResult,
};
pub use cli::{args, commands};
pub use config::ServiceConfig;
pub use server::build_router;
pub use storage::{
    CertificateIssuanceStore, CertificateIssueRecord, LocalStore, MemoryStore, UserRecord,
    UserStore,
};
pub use utils::{errors, paths};
