use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Publishing environments, addressed by name
#[derive(Debug, Clone)]
pub struct Environment {
    client: Client,
    options: Accumulator,
    name: Option<String>,
}

impl_request_options!(Environment);

impl Environment {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, name: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            name,
        }
    }

    fn path(&self) -> Result<String> {
        let name = require(&self.name, messages::ENVIRONMENT_REQUIRED)?;
        Ok(format!("environments/{}", encode_path(name)))
    }

    /// List environments
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "environments")
    }

    /// Fetch this environment
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Create an environment
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "environments")?
            .json(body))
    }

    /// Update this environment
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, self.path()?)?
            .json(body))
    }

    /// Delete this environment
    pub fn delete(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::DELETE, self.path()?)
    }
}
