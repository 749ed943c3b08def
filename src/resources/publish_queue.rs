use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use std::collections::BTreeMap;

/// Publish queue of a stack
#[derive(Debug, Clone)]
pub struct PublishQueue {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(PublishQueue);

impl PublishQueue {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::PUBLISH_QUEUE_UID_REQUIRED)?;
        Ok(format!("publish-queue/{}", encode_path(uid)))
    }

    /// List queued publish and unpublish actions
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "publish-queue")
    }

    /// Fetch one queued action
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Cancel a scheduled action
    pub fn cancel(&self) -> Result<PendingRequest> {
        let path = format!("{}/unpublish", self.path()?);
        self.options.request(&self.client, Method::GET, path)
    }
}
