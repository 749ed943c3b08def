use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

const PUBLISH_RULES: &str = "workflows/publishing_rules";

/// Workflows and publish rules of a stack
#[derive(Debug, Clone)]
pub struct Workflow {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Workflow);

impl Workflow {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::WORKFLOW_UID_REQUIRED)?;
        Ok(format!("workflows/{}", encode_path(uid)))
    }

    fn rule_path(rule_uid: &str) -> Result<String> {
        let rule_uid = super::non_empty(rule_uid, messages::PUBLISH_RULE_UID_REQUIRED)?;
        Ok(format!("{}/{}", PUBLISH_RULES, encode_path(rule_uid)))
    }

    fn request(&self, method: Method, path: impl Into<String>) -> Result<PendingRequest> {
        self.options.request(&self.client, method, path)
    }

    /// List workflows
    pub fn find(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "workflows")
    }

    /// Fetch this workflow
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.request(Method::GET, self.path()?)
    }

    /// Create a workflow
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "workflows")?.json(body))
    }

    /// Update this workflow
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::PUT, self.path()?)?.json(body))
    }

    /// Delete this workflow
    pub fn delete(&self) -> Result<PendingRequest> {
        self.request(Method::DELETE, self.path()?)
    }

    /// Enable this workflow
    pub fn enable(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/enable", self.path()?))
    }

    /// Disable this workflow
    pub fn disable(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/disable", self.path()?))
    }

    /// List publish rules
    pub fn find_publish_rules(&self) -> Result<PendingRequest> {
        self.request(Method::GET, PUBLISH_RULES)
    }

    /// Fetch a publish rule
    pub fn fetch_publish_rule(&self, rule_uid: &str) -> Result<PendingRequest> {
        self.request(Method::GET, Self::rule_path(rule_uid)?)
    }

    /// Create a publish rule
    pub fn create_publish_rule(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, PUBLISH_RULES)?.json(body))
    }

    /// Update a publish rule
    pub fn update_publish_rule(&self, rule_uid: &str, body: Value) -> Result<PendingRequest> {
        Ok(self
            .request(Method::PUT, Self::rule_path(rule_uid)?)?
            .json(body))
    }

    /// Delete a publish rule
    pub fn delete_publish_rule(&self, rule_uid: &str) -> Result<PendingRequest> {
        self.request(Method::DELETE, Self::rule_path(rule_uid)?)
    }

    /// Publish rules that apply to a content type
    pub fn publish_rules_by_content_type(&self, content_type_uid: &str) -> Result<PendingRequest> {
        let content_type_uid =
            super::non_empty(content_type_uid, messages::CONTENT_TYPE_UID_REQUIRED)?;
        self.request(
            Method::GET,
            format!("workflows/content_type/{}", encode_path(content_type_uid)),
        )
    }

    /// Workflow tasks assigned to the current user
    pub fn tasks(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "user/assignments")
    }
}
