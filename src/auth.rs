//! Authentication headers for the Content Management API
//!
//! The SDK does not acquire or refresh tokens. It only attaches a token the
//! caller already holds to every outgoing request:
//!
//! 1. **Authtoken** - a user session token, sent as `authtoken: <token>`
//! 2. **Management token** - a stack-scoped token, sent as `authorization: <token>`
//! 3. **OAuth access token** - sent as `Authorization: Bearer <token>`
//!
//! # Examples
//!
//! ```
//! use contentstack_management::Auth;
//!
//! let auth = Auth::authtoken("blt-user-session");
//! let auth = Auth::management_token("cs-management-token");
//! let auth = Auth::bearer("oauth-access-token");
//! ```

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Authentication method for the management API
///
/// # Security
///
/// All credentials are stored using [`SecretString`] to prevent accidental
/// exposure in logs or debug output.
#[derive(Clone)]
pub enum Auth {
    /// User session token, sent as `authtoken: <token>`
    Authtoken(SecretString),
    /// Stack management token, sent as `authorization: <token>`
    ManagementToken(SecretString),
    /// OAuth access token, sent as `Authorization: Bearer <token>`
    Bearer(SecretString),
}

impl Auth {
    /// Create a user session token authentication
    pub fn authtoken(token: impl Into<String>) -> Self {
        Auth::Authtoken(SecretString::new(token.into()))
    }

    /// Create a management token authentication
    pub fn management_token(token: impl Into<String>) -> Self {
        Auth::ManagementToken(SecretString::new(token.into()))
    }

    /// Create an OAuth bearer token authentication
    pub fn bearer(token: impl Into<String>) -> Self {
        Auth::Bearer(SecretString::new(token.into()))
    }

    /// Header name this method is sent under
    pub fn header_name(&self) -> &'static str {
        match self {
            Auth::Authtoken(_) => "authtoken",
            Auth::ManagementToken(_) => "authorization",
            Auth::Bearer(_) => "Authorization",
        }
    }

    /// Get the authorization header name and value
    pub(crate) fn header(&self) -> (&'static str, String) {
        match self {
            Auth::Authtoken(token) => (self.header_name(), token.expose_secret().clone()),
            Auth::ManagementToken(token) => (self.header_name(), token.expose_secret().clone()),
            Auth::Bearer(token) => (
                self.header_name(),
                format!("Bearer {}", token.expose_secret()),
            ),
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::Authtoken(_) => write!(f, "Auth::Authtoken(****)"),
            Auth::ManagementToken(_) => write!(f, "Auth::ManagementToken(****)"),
            Auth::Bearer(_) => write!(f, "Auth::Bearer(****)"),
        }
    }
}
