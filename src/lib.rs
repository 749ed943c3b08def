//! Contentstack Content Management API SDK for Rust
//!
//! A client for the Contentstack Content Management API (CMA): stacks,
//! content types, entries, assets, branches, locales, environments, webhooks,
//! workflows, releases, taxonomies, tokens and more.
//!
//! # Features
//!
//! - Async/await support with tokio runtime
//! - One client type per API resource with accumulating headers and params
//! - Requests are built eagerly and sent explicitly, exactly once
//! - Bounded retries for transient failures, optionally with exponential backoff
//! - Authtoken, management token and OAuth bearer authentication
//! - Typed response models that keep unknown fields
//! - Pluggable transport for testing
//!
//! # Example
//!
//! ```no_run
//! use contentstack_management::{models::EntriesResponse, Auth, ClientBuilder, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClientBuilder::new()
//!         .auth(Auth::authtoken("your-authtoken"))
//!         .build()?;
//!
//!     let mut entries = client.stack("your-api-key").content_type(Some("blog")).entry(None);
//!     entries.add_param("include_count", true)?;
//!
//!     let response = entries.find()?.send().await?.error_for_status()?;
//!     let entries: EntriesResponse = response.to_model()?;
//!     println!("{} entries", entries.count.unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

#![deny(missing_docs, missing_debug_implementations, unsafe_code)]
#![cfg_attr(not(test), deny(unused_results))]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod auth;
mod client;
mod config;
mod errors;
mod inject;
pub mod models;
mod request;
pub mod resources;
mod response;
mod retry;
mod transport;
mod util;

pub use auth::Auth;
pub use client::Client;
pub use config::{ClientBuilder, ClientConfig, Region};
pub use errors::{messages, ApiError, Error, ErrorKind, Result};
pub use inject::{HeaderInjector, CLIENT_NAME, EARLY_ACCESS_HEADER, X_USER_AGENT};
pub use models::{
    AssetResponse, AssetsResponse, BranchAliasResponse, BranchResponse, BranchesResponse,
    ContentTypeResponse, ContentTypesResponse, EntriesResponse, EntryResponse,
    EnvironmentResponse, EnvironmentsResponse, ExtensionResponse, ExtensionsResponse,
    GlobalFieldResponse, GlobalFieldsResponse, LabelResponse, LabelsResponse, LocaleResponse,
    LocalesResponse, NoticeResponse, OrganizationResponse, OrganizationsResponse,
    ReleaseResponse, ReleasesResponse, RoleResponse, RolesResponse, StackResponse,
    TaxonomiesResponse, TaxonomyResponse, TermResponse, TermsResponse, TokenResponse,
    TokensResponse, UserResponse, WebhookResponse, WebhooksResponse, WorkflowResponse,
    WorkflowsResponse,
};
pub use request::{Accumulator, Body, FormPart, FormValue, PendingRequest, Request, RequestOptions};
pub use resources::{
    Alias, Asset, AssetUpload, AuditLog, Branch, BulkOperation, ContentType, DeliveryToken, Entry,
    Environment, Extension, ExtensionUpload, GlobalField, Label, Locale, ManagementToken,
    Organization, PublishQueue, Release, ReleaseItem, Role, Stack, Taxonomy, Term, User, Webhook,
    Workflow,
};
pub use response::{as_json_str, model_from_str, RawResponse};
pub use retry::{Callback, RetryCallback, RetryDelay, RetryOn, RetryPolicy};
pub use transport::{HttpTransport, Transport};

// Re-export commonly used types
pub use secrecy::SecretString;

/// SDK version, matches Cargo.toml version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API host
pub const DEFAULT_HOST: &str = "api.contentstack.io";

/// Default API port
pub const DEFAULT_PORT: u16 = 443;

/// Default protocol
pub const DEFAULT_PROTOCOL: &str = "https";

/// Default API version path segment
pub const DEFAULT_VERSION: &str = "v3";

/// Default timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default number of retries
pub const DEFAULT_RETRIES: u32 = 3;
