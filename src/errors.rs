//! Error types and handling for the Contentstack Management SDK
//!
//! This module defines the error types that can be returned by SDK operations.
//! Local precondition failures (missing UIDs, empty keys) are raised before any
//! network activity. Transport failures come from the HTTP layer. Remote API
//! errors are never raised automatically: a non-2xx response is still returned
//! as a [`RawResponse`](crate::RawResponse) and the caller decides what to do
//! with it.
//!
//! # Error Categories
//!
//! - **InvalidArgument**: a required parameter was empty
//! - **InvalidState**: an operation needs a UID that was never set
//! - **Network / Timeout / Io**: transport-level failures
//! - **Deserialize**: a body did not match the requested shape
//! - **Api**: opt-in conversion of a non-2xx response
//!
//! # Example
//!
//! ```no_run
//! # use contentstack_management::{Client, Error};
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! let stack = client.stack("blt123");
//! match stack.branch(None).fetch() {
//!     Err(Error::InvalidState(msg)) => println!("not sent: {}", msg),
//!     Ok(request) => {
//!         let response = request.send().await?.error_for_status()?;
//!         println!("{}", response.as_string()?);
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or empty
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was invoked before a required identifier was set
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Remote API error, produced only by [`RawResponse::error_for_status`](crate::RawResponse::error_for_status)
    #[error("api {status}: {message} (code={error_code:?}, req={request_id:?})")]
    Api {
        /// HTTP status code
        status: u16,
        /// Contentstack error code from the response envelope
        error_code: Option<i64>,
        /// Error message from the response envelope
        message: String,
        /// Request ID from the x-request-id header
        request_id: Option<String>,
    },

    /// Deserialization error
    #[error("deserialize: {0}")]
    Deserialize(String),

    /// Network error
    #[error("network: {0}")]
    Network(String),

    /// Request timeout
    #[error("timeout")]
    Timeout,

    /// Body could not be read or decoded
    #[error("io: {0}")]
    Io(String),

    /// Configuration error
    #[error("config: {0}")]
    Config(String),

    /// Other errors
    #[error("other: {0}")]
    Other(String),
}

/// Broad error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local precondition failure (argument or state)
    Precondition,
    /// Authentication/authorization errors (401/403)
    Auth,
    /// Validation errors (400/422)
    Validation,
    /// Resource not found (404)
    NotFound,
    /// Rate limit exceeded (429)
    RateLimit,
    /// Request timeout
    Timeout,
    /// Server-side failure (5xx)
    Server,
    /// Transport failure
    Transport,
    /// Response shape mismatch
    Deserialize,
    /// Configuration error
    Config,
    /// Other/unknown error
    Other,
}

impl ErrorKind {
    /// Map an HTTP status code to an error kind
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => ErrorKind::Validation,
            401 | 403 => ErrorKind::Auth,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::Timeout,
            429 => ErrorKind::RateLimit,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Other,
        }
    }
}

impl Error {
    /// Get the error kind for categorization
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) | Error::InvalidState(_) => ErrorKind::Precondition,
            Error::Api { status, .. } => ErrorKind::from_status(*status),
            Error::Timeout => ErrorKind::Timeout,
            Error::Network(_) | Error::Io(_) => ErrorKind::Transport,
            Error::Deserialize(_) => ErrorKind::Deserialize,
            Error::Config(_) => ErrorKind::Config,
            Error::Other(_) => ErrorKind::Other,
        }
    }

    /// Check if the error is transient and worth retrying
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Api { status, .. } => is_retryable_status(*status),
            Error::Network(_) => true,
            Error::Timeout => true,
            Error::Io(_) => true,
            _ => false,
        }
    }

    /// Get the HTTP status code if this is an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the Contentstack error code if this is an API error
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Error::Api { error_code, .. } => *error_code,
            _ => None,
        }
    }

    /// Get the request ID if available
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

/// Statuses that indicate a transient server-side condition
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

/// Error envelope returned by the Content Management API
///
/// ```
/// use contentstack_management::ApiError;
///
/// let err: ApiError = serde_json::from_str(
///     r#"{"error_message":"bad","error_code":141,"errors":{"title":["is required"]}}"#,
/// ).unwrap();
/// assert_eq!(err.error_code(), Some(141));
/// assert_eq!(err.error_message(), Some("bad"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiError {
    /// Human readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Numeric Contentstack error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    /// Field-level error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl ApiError {
    /// Numeric error code
    pub fn error_code(&self) -> Option<i64> {
        self.error_code
    }

    /// Error message
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Field-level details
    pub fn errors(&self) -> Option<&serde_json::Value> {
        self.errors.as_ref()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() || err.is_request() {
            Error::Network(err.to_string())
        } else if err.is_body() {
            Error::Io(err.to_string())
        } else if err.is_decode() {
            Error::Deserialize(err.to_string())
        } else {
            Error::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Deserialize(err.to_string())
    }
}

/// User-facing validation messages
pub mod messages {
    /// Missing API key
    pub const API_KEY_REQUIRED: &str = "API Key Is Required";
    /// Missing content type UID
    pub const CONTENT_TYPE_UID_REQUIRED: &str = "Content Type Uid Is Required";
    /// Missing entry UID
    pub const ENTRY_UID_REQUIRED: &str = "Entry Uid Is Required";
    /// Missing asset UID
    pub const ASSET_UID_REQUIRED: &str = "Asset Uid Is Required";
    /// Missing folder UID
    pub const FOLDER_UID_REQUIRED: &str = "Folder Uid Is Required";
    /// Missing global field UID
    pub const GLOBAL_FIELD_UID_REQUIRED: &str = "Global Field Uid Is Required";
    /// Missing branch UID
    pub const BRANCH_UID_REQUIRED: &str = "Branch Uid Is Required";
    /// Missing alias UID
    pub const ALIAS_UID_REQUIRED: &str = "Alias Uid Is Required";
    /// Missing locale code
    pub const LOCALE_CODE_REQUIRED: &str = "Locale Code Is Required";
    /// Missing environment name
    pub const ENVIRONMENT_REQUIRED: &str = "Environment Name Is Required";
    /// Missing webhook UID
    pub const WEBHOOK_UID_REQUIRED: &str = "Webhook Uid Is Required";
    /// Missing workflow UID
    pub const WORKFLOW_UID_REQUIRED: &str = "Workflow Uid Is Required";
    /// Missing publish rule UID
    pub const PUBLISH_RULE_UID_REQUIRED: &str = "Publish Rule Uid Is Required";
    /// Missing release UID
    pub const RELEASE_UID_REQUIRED: &str = "Release Uid Is Required";
    /// Missing role UID
    pub const ROLE_UID_REQUIRED: &str = "Role Uid Is Required";
    /// Missing token UID
    pub const TOKEN_UID_REQUIRED: &str = "Token Uid Is Required";
    /// Missing extension UID
    pub const EXTENSION_UID_REQUIRED: &str = "Extension Uid Is Required";
    /// Missing label UID
    pub const LABEL_UID_REQUIRED: &str = "Label Uid Is Required";
    /// Missing audit log UID
    pub const AUDIT_LOG_UID_REQUIRED: &str = "Audit Log Uid Is Required";
    /// Missing publish queue UID
    pub const PUBLISH_QUEUE_UID_REQUIRED: &str = "Publish Queue Uid Is Required";
    /// Missing taxonomy UID
    pub const TAXONOMY_UID_REQUIRED: &str = "Taxonomy Uid Is Required";
    /// Missing term UID
    pub const TERM_UID_REQUIRED: &str = "Term Uid Is Required";
    /// Missing organization UID
    pub const ORGANIZATION_UID_REQUIRED: &str = "Organization Uid Is Required";
    /// Missing ownership transfer token
    pub const OWNERSHIP_TOKEN_REQUIRED: &str = "Ownership Token Is Required";
    /// Missing user UID
    pub const USER_UID_REQUIRED: &str = "User Uid Is Required";
    /// Missing account activation token
    pub const ACTIVATION_TOKEN_REQUIRED: &str = "Activation Token Is Required";
    /// Missing webhook execution UID
    pub const EXECUTION_UID_REQUIRED: &str = "Execution Uid Is Required";
    /// Missing bulk job ID
    pub const JOB_ID_REQUIRED: &str = "Job Id Is Required";
    /// Missing invitation share UID
    pub const SHARE_UID_REQUIRED: &str = "Share Uid Is Required";
    /// Missing asset type
    pub const ASSET_TYPE_REQUIRED: &str = "Asset Type Is Required";
    /// Missing search text
    pub const TYPEAHEAD_REQUIRED: &str = "Search Text Is Required";
    /// Empty header or param key
    pub const KEY_REQUIRED: &str = "Key Must Not Be Empty";
    /// Empty response text handed to the model converter
    pub const MODEL_TEXT_REQUIRED: &str = "Response Text Must Not Be Empty";
}
