use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Bulk publish, unpublish, delete and workflow updates
///
/// Queued jobs report a `job_id` that [`job_status`](Self::job_status) polls.
#[derive(Debug, Clone)]
pub struct BulkOperation {
    client: Client,
    options: Accumulator,
}

impl_request_options!(BulkOperation);

impl BulkOperation {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
        }
    }

    fn request(&self, method: Method, path: impl Into<String>) -> Result<PendingRequest> {
        self.options.request(&self.client, method, path)
    }

    /// Publish entries and assets in bulk
    pub fn publish(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .request(Method::POST, "bulk/publish")?
            .with_param("x-bulk-action", "publish")
            .json(body))
    }

    /// Unpublish entries and assets in bulk
    pub fn unpublish(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .request(Method::POST, "bulk/unpublish")?
            .with_param("x-bulk-action", "unpublish")
            .json(body))
    }

    /// Delete entries and assets in bulk
    pub fn delete(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "bulk/delete")?.json(body))
    }

    /// Change the workflow stage of entries in bulk
    pub fn update_workflow(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "bulk/workflow")?.json(body))
    }

    /// Status of a queued bulk job
    pub fn job_status(&self, job_id: &str) -> Result<PendingRequest> {
        let job_id = super::non_empty(job_id, messages::JOB_ID_REQUIRED)?;
        self.request(Method::GET, format!("bulk/jobs/{}", encode_path(job_id)))
    }
}
