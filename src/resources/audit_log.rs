use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use std::collections::BTreeMap;

/// Audit log of a stack
#[derive(Debug, Clone)]
pub struct AuditLog {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(AuditLog);

impl AuditLog {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    /// List log items
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "audit-logs")
    }

    /// Fetch one log item
    pub fn fetch(&self) -> Result<PendingRequest> {
        let uid = require(&self.uid, messages::AUDIT_LOG_UID_REQUIRED)?;
        self.options.request(
            &self.client,
            Method::GET,
            format!("audit-logs/{}", encode_path(uid)),
        )
    }
}
