use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Taxonomies of a stack
#[derive(Debug, Clone)]
pub struct Taxonomy {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Taxonomy);

impl Taxonomy {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::TAXONOMY_UID_REQUIRED)?;
        Ok(format!("taxonomies/{}", encode_path(uid)))
    }

    /// List taxonomies
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "taxonomies")
    }

    /// Fetch this taxonomy
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Create a taxonomy
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "taxonomies")?
            .json(body))
    }

    /// Update this taxonomy
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, self.path()?)?
            .json(body))
    }

    /// Delete this taxonomy
    pub fn delete(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::DELETE, self.path()?)
    }

    /// Export this taxonomy with its terms
    pub fn export(&self) -> Result<PendingRequest> {
        let path = format!("{}/export", self.path()?);
        self.options.request(&self.client, Method::GET, path)
    }

    /// Term client for this taxonomy
    pub fn term(&self, uid: Option<&str>) -> Term {
        Term {
            client: self.client.clone(),
            options: Accumulator::seeded(self.options.headers().clone()),
            taxonomy_uid: self.uid.clone(),
            uid: uid.map(str::to_string),
        }
    }
}

/// Terms of one taxonomy
#[derive(Debug, Clone)]
pub struct Term {
    client: Client,
    options: Accumulator,
    taxonomy_uid: Option<String>,
    uid: Option<String>,
}

impl_request_options!(Term);

impl Term {
    fn collection(&self) -> Result<String> {
        let taxonomy = require(&self.taxonomy_uid, messages::TAXONOMY_UID_REQUIRED)?;
        Ok(format!("taxonomies/{}/terms", encode_path(taxonomy)))
    }

    fn path(&self) -> Result<String> {
        let collection = self.collection()?;
        let uid = require(&self.uid, messages::TERM_UID_REQUIRED)?;
        Ok(format!("{}/{}", collection, encode_path(uid)))
    }

    fn request(&self, method: Method, path: String) -> Result<PendingRequest> {
        self.options.request(&self.client, method, path)
    }

    /// List terms
    pub fn find(&self) -> Result<PendingRequest> {
        self.request(Method::GET, self.collection()?)
    }

    /// Fetch this term
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.request(Method::GET, self.path()?)
    }

    /// Create a term
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, self.collection()?)?.json(body))
    }

    /// Update this term
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::PUT, self.path()?)?.json(body))
    }

    /// Delete this term
    pub fn delete(&self) -> Result<PendingRequest> {
        self.request(Method::DELETE, self.path()?)
    }

    /// Terms below this term
    pub fn descendants(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/descendants", self.path()?))
    }

    /// Terms above this term
    pub fn ancestors(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/ancestors", self.path()?))
    }

    /// Move this term under another parent: `{"term": {"parent_uid": ..., "order": ...}}`
    pub fn move_term(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .request(Method::PUT, format!("{}/move", self.path()?))?
            .json(body))
    }

    /// Search terms across all taxonomies
    pub fn search(&self, typeahead: &str) -> Result<PendingRequest> {
        let typeahead = super::non_empty(typeahead, messages::TYPEAHEAD_REQUIRED)?;
        Ok(self
            .request(Method::GET, "taxonomies/$all/terms".to_string())?
            .with_param("typeahead", typeahead))
    }
}
