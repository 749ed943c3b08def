use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Entry labels of a stack
#[derive(Debug, Clone)]
pub struct Label {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Label);

impl Label {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::LABEL_UID_REQUIRED)?;
        Ok(format!("labels/{}", encode_path(uid)))
    }

    /// List labels
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "labels")
    }

    /// Fetch this label
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Create a label
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "labels")?
            .json(body))
    }

    /// Update this label
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, self.path()?)?
            .json(body))
    }

    /// Delete this label
    pub fn delete(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::DELETE, self.path()?)
    }
}
