use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;

/// The account of the authenticated user
///
/// Requests carry no `api_key`; the session `authtoken` identifies the user.
#[derive(Debug, Clone)]
pub struct User {
    client: Client,
    options: Accumulator,
}

impl_request_options!(User);

impl User {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            options: Accumulator::default(),
        }
    }

    /// Fetch the current user
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "user")
    }

    /// Update the current user
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, "user")?
            .json(body))
    }

    /// Activate an account with the token from the activation email
    pub fn activate(&self, activation_token: &str, body: Value) -> Result<PendingRequest> {
        let token = super::non_empty(activation_token, messages::ACTIVATION_TOKEN_REQUIRED)?;
        Ok(self
            .options
            .request(
                &self.client,
                Method::POST,
                format!("user/activate/{}", encode_path(token)),
            )?
            .json(body))
    }

    /// Request a password reset email
    pub fn request_password(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "user/forgot_password")?
            .json(body))
    }

    /// Set a new password with a reset token
    pub fn reset_password(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "user/reset_password")?
            .json(body))
    }
}
