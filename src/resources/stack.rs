use super::{
    Alias, Asset, AuditLog, Branch, BulkOperation, ContentType, DeliveryToken, Environment,
    Extension, GlobalField, Label, Locale, ManagementToken, PublishQueue, Release, Role, Taxonomy,
    Webhook, Workflow,
};
use crate::{
    client::Client,
    errors::{messages, Error, Result},
    request::{impl_request_options, Accumulator, PendingRequest, API_KEY_HEADER},
    util::encode_path,
};
use http::Method;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// A stack, addressed by its API key
///
/// Every resource client created from a stack inherits its headers at the
/// moment of creation: the `api_key`, the `branch` when one is set, and any
/// header added through [`RequestOptions`](crate::RequestOptions).
/// A stack with a blank API key hands the blank key on, and every operation of
/// those children then fails with `InvalidState` before anything is sent.
///
/// ```no_run
/// # use contentstack_management::{Client, RequestOptions};
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let stack = client.stack("blt123").with_branch("development");
/// let response = stack.content_type(Some("blog")).fetch()?.send().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Stack {
    client: Client,
    options: Accumulator,
}

impl_request_options!(Stack);

impl Stack {
    pub(crate) fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            options: Accumulator::seeded(BTreeMap::from([(API_KEY_HEADER.to_string(), api_key)])),
        }
    }

    /// Scope every request of this stack (and its children) to a branch
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.options.set_header("branch", branch);
        self
    }

    /// API key of this stack
    pub fn api_key(&self) -> Option<&str> {
        self.options.header(API_KEY_HEADER)
    }

    fn inherited(&self) -> BTreeMap<String, String> {
        self.options.headers().clone()
    }

    fn checked(&self, method: Method, path: impl Into<String>) -> Result<PendingRequest> {
        match self.api_key() {
            Some(key) if !key.trim().is_empty() => {
                self.options.request(&self.client, method, path)
            }
            _ => Err(Error::InvalidState(messages::API_KEY_REQUIRED.to_string())),
        }
    }

    /// Fetch stack details
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.checked(Method::GET, "stacks")
    }

    /// Update the stack name or description
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.checked(Method::PUT, "stacks")?.json(body))
    }

    /// Send a transfer-ownership invitation
    pub fn transfer_ownership(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.checked(Method::POST, "stacks/transfer_ownership")?.json(body))
    }

    /// Accept a transfer-ownership invitation on behalf of `user_uid`
    pub fn accept_ownership(&self, ownership_token: &str, user_uid: &str) -> Result<PendingRequest> {
        let token = super::non_empty(ownership_token, messages::OWNERSHIP_TOKEN_REQUIRED)?;
        let user_uid = super::non_empty(user_uid, messages::USER_UID_REQUIRED)?;
        let pending = self.checked(
            Method::GET,
            format!("stacks/accept_ownership/{}", encode_path(token)),
        )?;
        let api_key = self.api_key().unwrap_or_default().to_string();
        Ok(pending.with_param("api_key", api_key).with_param("uid", user_uid))
    }

    /// Fetch stack settings
    pub fn settings(&self) -> Result<PendingRequest> {
        self.checked(Method::GET, "stacks/settings")
    }

    /// Update stack settings
    pub fn update_settings(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.checked(Method::POST, "stacks/settings")?.json(body))
    }

    /// Reset stack settings to their defaults
    pub fn reset_settings(&self) -> Result<PendingRequest> {
        let body = json!({
            "stack_settings": {
                "discrete_variables": {},
                "stack_variables": {},
                "rte": {}
            }
        });
        Ok(self.checked(Method::POST, "stacks/settings")?.json(body))
    }

    /// Share the stack with users
    pub fn share(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.checked(Method::POST, "stacks/share")?.json(body))
    }

    /// Revoke a user's access to the stack
    pub fn unshare(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.checked(Method::POST, "stacks/unshare")?.json(body))
    }

    /// List stack collaborators
    pub fn users(&self) -> Result<PendingRequest> {
        Ok(self
            .checked(Method::GET, "stacks")?
            .with_param("include_collaborators", true))
    }

    /// Change the roles of existing collaborators
    pub fn update_user_role(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.checked(Method::POST, "stacks/users/roles")?.json(body))
    }

    /// Content type client; pass `None` to list or create
    pub fn content_type(&self, uid: Option<&str>) -> ContentType {
        ContentType::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Global field client
    pub fn global_field(&self, uid: Option<&str>) -> GlobalField {
        GlobalField::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Asset client
    pub fn asset(&self, uid: Option<&str>) -> Asset {
        Asset::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Branch client
    pub fn branch(&self, uid: Option<&str>) -> Branch {
        Branch::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Branch alias client
    pub fn alias(&self, uid: Option<&str>) -> Alias {
        Alias::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Locale client, addressed by locale code
    pub fn locale(&self, code: Option<&str>) -> Locale {
        Locale::new(self.client.clone(), self.inherited(), code.map(str::to_string))
    }

    /// Environment client, addressed by environment name
    pub fn environment(&self, name: Option<&str>) -> Environment {
        Environment::new(self.client.clone(), self.inherited(), name.map(str::to_string))
    }

    /// Webhook client
    pub fn webhook(&self, uid: Option<&str>) -> Webhook {
        Webhook::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Workflow client
    pub fn workflow(&self, uid: Option<&str>) -> Workflow {
        Workflow::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Release client
    pub fn release(&self, uid: Option<&str>) -> Release {
        Release::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Role client
    pub fn role(&self, uid: Option<&str>) -> Role {
        Role::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Delivery token client
    pub fn delivery_token(&self, uid: Option<&str>) -> DeliveryToken {
        DeliveryToken::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Management token client
    pub fn management_token(&self, uid: Option<&str>) -> ManagementToken {
        ManagementToken::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Extension client
    pub fn extension(&self, uid: Option<&str>) -> Extension {
        Extension::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Label client
    pub fn label(&self, uid: Option<&str>) -> Label {
        Label::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Audit log client
    pub fn audit_log(&self, uid: Option<&str>) -> AuditLog {
        AuditLog::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Publish queue client
    pub fn publish_queue(&self, uid: Option<&str>) -> PublishQueue {
        PublishQueue::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }

    /// Bulk operation client
    pub fn bulk_operation(&self) -> BulkOperation {
        BulkOperation::new(self.client.clone(), self.inherited())
    }

    /// Taxonomy client
    pub fn taxonomy(&self, uid: Option<&str>) -> Taxonomy {
        Taxonomy::new(self.client.clone(), self.inherited(), uid.map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resources::testing::{assert_request, client}, RequestOptions};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stack_seeds_api_key() {
        let stack = client().stack("blt123");
        assert_eq!(stack.api_key(), Some("blt123"));
        let request = stack.fetch().unwrap().into_request();
        assert_request(&request, Method::GET, "stacks");
        assert_eq!(request.header("api_key"), Some("blt123"));
    }

    #[test]
    fn test_empty_api_key_is_invalid_state() {
        let stack = client().stack("");
        assert!(matches!(stack.fetch(), Err(Error::InvalidState(m)) if m == messages::API_KEY_REQUIRED));
    }

    #[test]
    fn test_blank_api_key_blocks_child_resources() {
        let stack = client().stack("");
        assert!(matches!(
            stack.content_type(None).find(),
            Err(Error::InvalidState(m)) if m == messages::API_KEY_REQUIRED
        ));
        assert!(matches!(
            stack.content_type(Some("blog")).entry(Some("blt1")).fetch(),
            Err(Error::InvalidState(m)) if m == messages::API_KEY_REQUIRED
        ));
        assert!(matches!(stack.delivery_token(None).find(), Err(Error::InvalidState(_))));
        assert!(matches!(stack.bulk_operation().job_status("job1"), Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_header_casing_on_stack_children() {
        let mut content_type = client()
            .stack("blt123")
            .with_branch("main")
            .content_type(Some("blog"));
        content_type.add_header("branch", "first").unwrap();
        content_type.add_header("Branch", "second").unwrap();
        content_type.add_header("API_KEY", "blt-other").unwrap();
        content_type.add_header("X-Custom", "a").unwrap();
        let _ = content_type.remove_header("x-custom");

        let request = content_type.fetch().unwrap().into_request();
        assert_eq!(request.header("branch"), Some("second"));
        assert_eq!(request.header("api_key"), Some("blt-other"));
        assert_eq!(request.header("x-custom"), None);
        assert_eq!(request.headers().len(), 2);
    }

    #[test]
    fn test_api_key_lookup_ignores_case() {
        let mut stack = client().stack("blt123");
        stack.add_header("Api_Key", "blt-other").unwrap();
        assert_eq!(stack.api_key(), Some("blt-other"));
        assert_eq!(stack.headers().len(), 1);
    }

    #[test]
    fn test_branch_flows_to_children() {
        let stack = client().stack("blt123").with_branch("development");
        let request = stack.content_type(Some("blog")).fetch().unwrap().into_request();
        assert_eq!(request.header("branch"), Some("development"));
        assert_eq!(request.header("api_key"), Some("blt123"));
    }

    #[test]
    fn test_stack_headers_flow_to_children_created_later() {
        let mut stack = client().stack("blt123");
        stack.add_header("authorization", "cs-management-token").unwrap();
        let request = stack.environment(None).find().unwrap().into_request();
        assert_eq!(request.header("authorization"), Some("cs-management-token"));
    }

    #[test]
    fn test_users_includes_collaborators() {
        let request = client().stack("blt123").users().unwrap().into_request();
        assert_eq!(request.query_string(), "include_collaborators=true");
    }

    #[test]
    fn test_reset_settings_body() {
        let request = client().stack("blt123").reset_settings().unwrap().into_request();
        assert_request(&request, Method::POST, "stacks/settings");
        let body = request.body().and_then(|b| b.as_json()).unwrap().clone();
        assert_eq!(
            body,
            json!({"stack_settings": {"discrete_variables": {}, "stack_variables": {}, "rte": {}}})
        );
    }

    #[test]
    fn test_accept_ownership() {
        let request = client()
            .stack("blt123")
            .accept_ownership("tok 1", "blt-user")
            .unwrap()
            .into_request();
        assert_request(&request, Method::GET, "stacks/accept_ownership/tok%201");
        assert_eq!(request.query_string(), "api_key=blt123&uid=blt-user");
    }

    #[test]
    fn test_accept_ownership_requires_user_uid() {
        let stack = client().stack("blt123");
        assert!(matches!(
            stack.accept_ownership("tok1", " "),
            Err(Error::InvalidArgument(m)) if m == messages::USER_UID_REQUIRED
        ));
        assert!(matches!(
            stack.accept_ownership("", "blt-user"),
            Err(Error::InvalidArgument(m)) if m == messages::OWNERSHIP_TOKEN_REQUIRED
        ));
    }
}
