use super::Entry;
use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, FormPart, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Content type schemas of a stack
#[derive(Debug, Clone)]
pub struct ContentType {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(ContentType);

impl ContentType {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    /// Content type UID, if set
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::CONTENT_TYPE_UID_REQUIRED)?;
        Ok(format!("content_types/{}", encode_path(uid)))
    }

    /// List content types
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "content_types")
    }

    /// Fetch this content type
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Create a content type from `{"content_type": {...}}`
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "content_types")?
            .json(body))
    }

    /// Update this content type
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, self.path()?)?
            .json(body))
    }

    /// Delete this content type
    pub fn delete(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::DELETE, self.path()?)
    }

    /// Content types and global fields referring to this content type
    pub fn references(&self) -> Result<PendingRequest> {
        let path = format!("{}/references", self.path()?);
        self.options.request(&self.client, Method::GET, path)
    }

    /// Import a content type from an exported JSON file
    pub fn import(&self, file_name: &str, bytes: Vec<u8>) -> Result<PendingRequest> {
        let part = FormPart::file("content_type", file_name, "application/json", bytes);
        Ok(self
            .options
            .request(&self.client, Method::POST, "content_types/import")?
            .multipart(vec![part]))
    }

    /// Entry client for this content type
    pub fn entry(&self, uid: Option<&str>) -> Entry {
        Entry::new(
            self.client.clone(),
            self.options.headers().clone(),
            self.uid.clone(),
            uid.map(str::to_string),
        )
    }
}

/// Reusable field groups shared between content types
#[derive(Debug, Clone)]
pub struct GlobalField {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(GlobalField);

impl GlobalField {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::GLOBAL_FIELD_UID_REQUIRED)?;
        Ok(format!("global_fields/{}", encode_path(uid)))
    }

    /// List global fields
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "global_fields")
    }

    /// Fetch this global field
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Create a global field from `{"global_field": {...}}`
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "global_fields")?
            .json(body))
    }

    /// Update this global field
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, self.path()?)?
            .json(body))
    }

    /// Delete this global field
    pub fn delete(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::DELETE, self.path()?)
    }

    /// Import a global field from an exported JSON file
    pub fn import(&self, file_name: &str, bytes: Vec<u8>) -> Result<PendingRequest> {
        let part = FormPart::file("global_field", file_name, "application/json", bytes);
        Ok(self
            .options
            .request(&self.client, Method::POST, "global_fields/import")?
            .multipart(vec![part]))
    }
}
