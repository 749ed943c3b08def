//! Contentstack Management client
//!
//! The [`Client`] holds the configuration, the header injector and the
//! transport. It is cheap to clone and is the entry point to every resource
//! client.
//!
//! # Architecture
//!
//! - **Resource clients** (`Stack`, `Entry`, `Asset`, ...) accumulate headers
//!   and params and turn method calls into [`PendingRequest`]s
//! - **Header injection** stamps identification and auth headers on dispatch
//! - **Retry logic** resubmits failed attempts up to the configured ceiling
//! - **Transport** sends the request with `reqwest` and buffers the response
//!
//! # Examples
//!
//! ```no_run
//! use contentstack_management::{ClientBuilder, Auth, EntriesResponse};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new()
//!     .auth(Auth::authtoken("your-authtoken"))
//!     .retries(5)
//!     .timeout_ms(30000)
//!     .build()?;
//!
//! let entries: EntriesResponse = client
//!     .stack("your-api-key")
//!     .content_type(Some("blog"))
//!     .entry(None)
//!     .find()?
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .to_model()?;
//! println!("{} entries", entries.entries.len());
//! # Ok(())
//! # }
//! ```

use crate::{
    config::{ClientBuilder, ClientConfig},
    errors::{messages, Error, Result},
    inject::HeaderInjector,
    request::{Accumulator, PendingRequest},
    resources::{Organization, Stack, User},
    transport::{HttpTransport, Transport},
};
use http::Method;
use std::{collections::BTreeMap, sync::Arc};
use tracing::debug;

/// Contentstack Management API client
///
/// Cloning a client is cheap; clones share the transport and configuration.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    injector: Arc<HeaderInjector>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url())
            .field("timeout", &self.config.timeout)
            .field("retries", &self.config.retry.max_retries())
            .field("auth", &self.config.auth)
            .finish()
    }
}

impl Client {
    /// Create a new client with the given configuration
    pub(crate) fn new(config: ClientConfig, transport: Option<Arc<dyn Transport>>) -> Result<Self> {
        let transport = match transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(config.base_url(), config.timeout)?),
        };

        let injector = HeaderInjector::new(config.auth.clone(), config.user_agent_suffix.as_deref())
            .with_early_access(&config.early_access);

        debug!("Created Contentstack client for {}", config.base_url());

        Ok(Self {
            config: Arc::new(config),
            transport,
            injector: Arc::new(injector),
        })
    }

    /// Start configuring a client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub(crate) fn injector(&self) -> &HeaderInjector {
        &self.injector
    }

    /// Stack client scoped by API key
    pub fn stack(&self, api_key: impl Into<String>) -> Stack {
        Stack::new(self.clone(), api_key.into())
    }

    /// Create a new stack in an organization
    ///
    /// `POST stacks` with the `organization_uid` header and no API key.
    pub fn create_stack(&self, organization_uid: &str, body: serde_json::Value) -> Result<PendingRequest> {
        if organization_uid.trim().is_empty() {
            return Err(Error::InvalidArgument(
                messages::ORGANIZATION_UID_REQUIRED.to_string(),
            ));
        }
        let options = Accumulator::seeded(BTreeMap::from([(
            "organization_uid".to_string(),
            organization_uid.to_string(),
        )]));
        Ok(options.request(self, Method::POST, "stacks")?.json(body))
    }

    /// Client for the logged-in user
    pub fn user(&self) -> User {
        User::new(self.clone())
    }

    /// Organization client; pass `None` to list organizations
    pub fn organization(&self, uid: Option<&str>) -> Organization {
        Organization::new(self.clone(), uid.map(str::to_string))
    }
}
