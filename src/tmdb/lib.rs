// ============================================================================
// LIB.RS - LIBRARY EXPORTS FOR TESTING
// Credential acquisition, API sessions and list helpers for the TMDB suite
// ============================================================================

pub mod auth;
pub mod config;
pub mod error;
pub mod expect;
pub mod lists;
pub mod logging;
pub mod session;

// Re-export key types for tests
pub use auth::{session_cookie, CredentialAcquirer, SESSION_COOKIE_PREFIX};
pub use config::Config;
pub use error::{AuthError, AuthResult, ConfigError, ExpectationError};
pub use expect::{json_contains, JsonType};
pub use lists::{CreatedList, ListItem, ListUpdate, MediaType, NewList};
pub use session::{AccessScope, ApiResponse, ApiSession};
