//! Server-side user account management for the Identity Toolkit REST API.
//!
//! Creates, looks up, updates, lists and deletes the user accounts of a single
//! project, and manages their custom claims. Caller input is validated
//! locally before any request is built.
//!
//! # Core Components
//!
//! - [`UserManager`] - Account lifecycle operations for one project
//! - [`HttpClient`] - Transport seam; [`ReqwestHttpClient`] is the default
//! - [`UserRecord`] - Read-only view over a user returned by the server
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use identity_admin::{StaticToken, UserManager, UserUpdate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = UserManager::new("my-project", StaticToken::new("ya29.token"))?;
//!
//! let user = manager
//!     .update_user("some-uid", UserUpdate::new().disabled(true))
//!     .await?;
//! assert!(user.disabled());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod manager;
pub mod user;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_BASE_URL, UserManagerConfig};
pub use error::{AdminError, AdminResult, ValidationError, ValidationResult};
pub use http::{
    CredentialProvider, HttpClient, HttpResponse, ReqwestHttpClient, StaticToken, TransportError,
};
pub use manager::{MAX_LIST_RESULTS, UserManager, UserManagerBuilder};
pub use user::{LookupKey, ProviderUserInfo, UserAttributes, UserQuery, UserRecord, UserUpdate};
