use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, FormPart, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Webhooks of a stack and their executions
#[derive(Debug, Clone)]
pub struct Webhook {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Webhook);

impl Webhook {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::WEBHOOK_UID_REQUIRED)?;
        Ok(format!("webhooks/{}", encode_path(uid)))
    }

    fn execution_path(execution_uid: &str, action: &str) -> Result<String> {
        let execution_uid = super::non_empty(execution_uid, messages::EXECUTION_UID_REQUIRED)?;
        Ok(format!("webhooks/{}/{}", encode_path(execution_uid), action))
    }

    fn request(&self, method: Method, path: impl Into<String>) -> Result<PendingRequest> {
        self.options.request(&self.client, method, path)
    }

    /// List webhooks
    pub fn find(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "webhooks")
    }

    /// Fetch this webhook
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.request(Method::GET, self.path()?)
    }

    /// Create a webhook
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "webhooks")?.json(body))
    }

    /// Update this webhook
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::PUT, self.path()?)?.json(body))
    }

    /// Delete this webhook
    pub fn delete(&self) -> Result<PendingRequest> {
        self.request(Method::DELETE, self.path()?)
    }

    /// Export this webhook as JSON
    pub fn export(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/export", self.path()?))
    }

    /// Import a webhook from an exported JSON file
    pub fn import(&self, file_name: &str, bytes: Vec<u8>) -> Result<PendingRequest> {
        let part = FormPart::file("webhook", file_name, "application/json", bytes);
        Ok(self
            .request(Method::POST, "webhooks/import")?
            .multipart(vec![part]))
    }

    /// Execution history of this webhook
    pub fn executions(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/executions", self.path()?))
    }

    /// Retry a failed execution
    pub fn retry(&self, execution_uid: &str) -> Result<PendingRequest> {
        self.request(Method::POST, Self::execution_path(execution_uid, "retry")?)
    }

    /// Request and response log of an execution
    pub fn logs(&self, execution_uid: &str) -> Result<PendingRequest> {
        self.request(Method::GET, Self::execution_path(execution_uid, "logs")?)
    }
}
