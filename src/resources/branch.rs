use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Branches of a stack
#[derive(Debug, Clone)]
pub struct Branch {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Branch);

impl Branch {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::BRANCH_UID_REQUIRED)?;
        Ok(format!("stacks/branches/{}", encode_path(uid)))
    }

    /// List branches
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "stacks/branches")
    }

    /// Fetch this branch
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Create a branch from `{"branch": {"uid": ..., "source": ...}}`
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "stacks/branches")?
            .json(body))
    }

    /// Delete this branch and its content
    pub fn delete(&self) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::DELETE, self.path()?)?
            .with_param("force", true))
    }
}

/// Branch aliases of a stack
#[derive(Debug, Clone)]
pub struct Alias {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Alias);

impl Alias {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::ALIAS_UID_REQUIRED)?;
        Ok(format!("stacks/branch_aliases/{}", encode_path(uid)))
    }

    /// List aliases
    pub fn find(&self) -> Result<PendingRequest> {
        self.options
            .request(&self.client, Method::GET, "stacks/branch_aliases")
    }

    /// Fetch this alias
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Point this alias at a branch: `{"branch_alias": {"target_branch": ...}}`
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, self.path()?)?
            .json(body))
    }

    /// Delete this alias
    pub fn delete(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::DELETE, self.path()?)
    }
}
