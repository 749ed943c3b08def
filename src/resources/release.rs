use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

fn release_path(uid: &Option<String>) -> Result<String> {
    let uid = require(uid, messages::RELEASE_UID_REQUIRED)?;
    Ok(format!("releases/{}", encode_path(uid)))
}

/// Releases of a stack
#[derive(Debug, Clone)]
pub struct Release {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Release);

impl Release {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn request(&self, method: Method, path: impl Into<String>) -> Result<PendingRequest> {
        self.options.request(&self.client, method, path)
    }

    /// List releases
    pub fn find(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "releases")
    }

    /// Fetch this release
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.request(Method::GET, release_path(&self.uid)?)
    }

    /// Create a release
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "releases")?.json(body))
    }

    /// Update this release
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::PUT, release_path(&self.uid)?)?.json(body))
    }

    /// Delete this release
    pub fn delete(&self) -> Result<PendingRequest> {
        self.request(Method::DELETE, release_path(&self.uid)?)
    }

    /// Copy this release under a new name
    pub fn clone_release(&self, body: Value) -> Result<PendingRequest> {
        let path = format!("{}/clone", release_path(&self.uid)?);
        Ok(self.request(Method::POST, path)?.json(body))
    }

    /// Deploy this release to environments
    pub fn deploy(&self, body: Value) -> Result<PendingRequest> {
        let path = format!("{}/deploy", release_path(&self.uid)?);
        Ok(self.request(Method::POST, path)?.json(body))
    }

    /// Items of this release
    pub fn item(&self) -> ReleaseItem {
        ReleaseItem {
            client: self.client.clone(),
            options: Accumulator::seeded(self.options.headers().clone()),
            release_uid: self.uid.clone(),
        }
    }
}

/// Items of one release
#[derive(Debug, Clone)]
pub struct ReleaseItem {
    client: Client,
    options: Accumulator,
    release_uid: Option<String>,
}

impl_request_options!(ReleaseItem);

impl ReleaseItem {
    fn request(&self, method: Method, suffix: &str) -> Result<PendingRequest> {
        let path = format!("{}/{}", release_path(&self.release_uid)?, suffix);
        self.options.request(&self.client, method, path)
    }

    /// List items
    pub fn find(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "items")
    }

    /// Add one item
    pub fn add(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "item")?.json(body))
    }

    /// Add several items
    pub fn add_many(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "items")?.json(body))
    }

    /// Move items to their latest versions
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::PUT, "update_items")?.json(body))
    }

    /// Remove items
    pub fn delete(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::DELETE, "items")?.json(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        resources::testing::{assert_request, client},
        Error,
    };
    use serde_json::json;

    #[test]
    fn test_release_actions() {
        let release = client().stack("blt123").release(Some("rel1"));
        assert_request(
            &release.clone_release(json!({"release": {"name": "copy"}})).unwrap().into_request(),
            Method::POST,
            "releases/rel1/clone",
        );
        assert_request(
            &release.deploy(json!({})).unwrap().into_request(),
            Method::POST,
            "releases/rel1/deploy",
        );
    }

    #[test]
    fn test_items() {
        let items = client().stack("blt123").release(Some("rel1")).item();
        assert_request(&items.find().unwrap().into_request(), Method::GET, "releases/rel1/items");
        assert_request(&items.add(json!({})).unwrap().into_request(), Method::POST, "releases/rel1/item");
        assert_request(
            &items.update(json!({})).unwrap().into_request(),
            Method::PUT,
            "releases/rel1/update_items",
        );
        assert_request(
            &items.delete(json!({"items": []})).unwrap().into_request(),
            Method::DELETE,
            "releases/rel1/items",
        );
    }

    #[test]
    fn test_items_need_release_uid() {
        let items = client().stack("blt123").release(None).item();
        assert!(matches!(
            items.find(),
            Err(Error::InvalidState(m)) if m == messages::RELEASE_UID_REQUIRED
        ));
    }
}
