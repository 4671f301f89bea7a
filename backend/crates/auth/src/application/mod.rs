//! Application Layer
//!
//! Use cases and application services.

pub mod authorize;
pub mod config;
pub mod issue_token;

// Re-exports
pub use authorize::{AccountPolicy, AuthorizeUseCase, AuthorizedIdentity};
pub use config::AuthConfig;
pub use issue_token::{IssueSteamTokenUseCase, IssueTestTokenUseCase, IssueTokenOutput};
