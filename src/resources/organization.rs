use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;

/// Organizations the user belongs to
#[derive(Debug, Clone)]
pub struct Organization {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Organization);

impl Organization {
    pub(crate) fn new(client: Client, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::default(),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::ORGANIZATION_UID_REQUIRED)?;
        Ok(format!("organizations/{}", encode_path(uid)))
    }

    fn request(&self, method: Method, suffix: &str) -> Result<PendingRequest> {
        let path = format!("{}/{}", self.path()?, suffix);
        self.options.request(&self.client, method, path)
    }

    /// List organizations
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "organizations")
    }

    /// Fetch this organization
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Roles defined in this organization
    pub fn roles(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "roles")
    }

    /// Invite users to the organization
    pub fn add_users(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "share")?.json(body))
    }

    /// Remove users from the organization
    pub fn remove_users(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::DELETE, "share")?.json(body))
    }

    /// Resend a pending invitation
    pub fn resend_invitation(&self, share_uid: &str) -> Result<PendingRequest> {
        let share_uid = super::non_empty(share_uid, messages::SHARE_UID_REQUIRED)?;
        self.request(
            Method::GET,
            &format!("{}/resend_invitation", encode_path(share_uid)),
        )
    }

    /// Pending invitations
    pub fn invitations(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "share")
    }

    /// Transfer ownership to another member
    pub fn transfer_ownership(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "transfer-ownership")?.json(body))
    }

    /// Stacks in this organization
    pub fn stacks(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "stacks")
    }

    /// Organization audit logs
    pub fn logs(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "logs")
    }
}
