use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, FormPart, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// An extension source file to upload
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionUpload {
    file_name: String,
    bytes: Vec<u8>,
    title: String,
    kind: String,
    data_type: Option<String>,
    tags: Vec<String>,
}

impl ExtensionUpload {
    /// Upload an HTML source file as an extension of `kind` (`field`, `widget`, `dashboard`)
    pub fn new(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        title: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            title: title.into(),
            kind: kind.into(),
            data_type: None,
            tags: Vec::new(),
        }
    }

    /// Data type stored by a custom field
    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    /// Extension tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    fn into_parts(self) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::file("extension[upload]", self.file_name, "text/html", self.bytes),
            FormPart::text("extension[title]", self.title),
            FormPart::text("extension[type]", self.kind),
        ];
        if let Some(data_type) = self.data_type {
            parts.push(FormPart::text("extension[data_type]", data_type));
        }
        if !self.tags.is_empty() {
            parts.push(FormPart::text("extension[tags]", self.tags.join(",")));
        }
        parts
    }
}

/// Custom fields, widgets and dashboards of a stack
#[derive(Debug, Clone)]
pub struct Extension {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Extension);

impl Extension {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::EXTENSION_UID_REQUIRED)?;
        Ok(format!("extensions/{}", encode_path(uid)))
    }

    /// List extensions
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "extensions")
    }

    /// Fetch this extension
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Create an extension hosted elsewhere (`src` URL) or inline (`srcdoc`)
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "extensions")?
            .json(body))
    }

    /// Create an extension from an uploaded source file
    pub fn upload(&self, upload: ExtensionUpload) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "extensions")?
            .multipart(upload.into_parts()))
    }

    /// Update this extension
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, self.path()?)?
            .json(body))
    }

    /// Delete this extension
    pub fn delete(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::DELETE, self.path()?)
    }
}
