use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Stack roles
#[derive(Debug, Clone)]
pub struct Role {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Role);

impl Role {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::ROLE_UID_REQUIRED)?;
        Ok(format!("roles/{}", encode_path(uid)))
    }

    /// List roles
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "roles")
    }

    /// Fetch this role
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Create a role
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "roles")?
            .json(body))
    }

    /// Update this role
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, self.path()?)?
            .json(body))
    }

    /// Delete this role
    pub fn delete(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::DELETE, self.path()?)
    }
}
