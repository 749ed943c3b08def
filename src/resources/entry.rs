use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, FormPart, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Entries of one content type
///
/// Created through [`ContentType::entry`](crate::ContentType::entry). Every
/// operation needs the content type UID; the ones addressing a single entry
/// also need the entry UID.
#[derive(Debug, Clone)]
pub struct Entry {
    client: Client,
    options: Accumulator,
    content_type_uid: Option<String>,
    uid: Option<String>,
}

impl_request_options!(Entry);

impl Entry {
    pub(crate) fn new(
        client: Client,
        headers: BTreeMap<String, String>,
        content_type_uid: Option<String>,
        uid: Option<String>,
    ) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            content_type_uid,
            uid,
        }
    }

    /// Entry UID, if set
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn collection(&self) -> Result<String> {
        let content_type = require(&self.content_type_uid, messages::CONTENT_TYPE_UID_REQUIRED)?;
        Ok(format!("content_types/{}/entries", encode_path(content_type)))
    }

    fn path(&self) -> Result<String> {
        let collection = self.collection()?;
        let uid = require(&self.uid, messages::ENTRY_UID_REQUIRED)?;
        Ok(format!("{}/{}", collection, encode_path(uid)))
    }

    fn request(&self, method: Method, path: String) -> Result<PendingRequest> {
        self.options.request(&self.client, method, path)
    }

    /// List entries
    pub fn find(&self) -> Result<PendingRequest> {
        self.request(Method::GET, self.collection()?)
    }

    /// Fetch this entry
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.request(Method::GET, self.path()?)
    }

    /// Create an entry from `{"entry": {...}}`
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, self.collection()?)?.json(body))
    }

    /// Update this entry
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::PUT, self.path()?)?.json(body))
    }

    /// Delete this entry
    pub fn delete(&self) -> Result<PendingRequest> {
        self.request(Method::DELETE, self.path()?)
    }

    /// Name a version of this entry
    pub fn version_name(&self, version: u32, body: Value) -> Result<PendingRequest> {
        let path = format!("{}/versions/{}/name", self.path()?, version);
        Ok(self.request(Method::POST, path)?.json(body))
    }

    /// Entries referring to this entry
    pub fn references(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/references", self.path()?))
    }

    /// Locales this entry exists in
    pub fn languages(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/locales", self.path()?))
    }

    /// Save a localized copy of this entry
    pub fn localize(&self, locale: &str, body: Value) -> Result<PendingRequest> {
        let locale = super::non_empty(locale, messages::LOCALE_CODE_REQUIRED)?;
        Ok(self
            .request(Method::PUT, self.path()?)?
            .with_param("locale", locale)
            .json(body))
    }

    /// Remove the localized copy of this entry
    pub fn unlocalize(&self, locale: &str) -> Result<PendingRequest> {
        let locale = super::non_empty(locale, messages::LOCALE_CODE_REQUIRED)?;
        Ok(self
            .request(Method::POST, format!("{}/unlocalize", self.path()?))?
            .with_param("locale", locale))
    }

    /// Export this entry as JSON
    pub fn export(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/export", self.path()?))
    }

    /// Publish this entry to environments and locales
    pub fn publish(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .request(Method::POST, format!("{}/publish", self.path()?))?
            .json(body))
    }

    /// Publish entries together with their references through the bulk queue
    pub fn publish_with_references(&self, body: Value) -> Result<PendingRequest> {
        let _ = require(&self.content_type_uid, messages::CONTENT_TYPE_UID_REQUIRED)?;
        Ok(self
            .request(Method::POST, "bulk/publish".to_string())?
            .with_param("approvals", true)
            .with_param("x-bulk-action", "publish")
            .json(body))
    }

    /// Unpublish this entry
    pub fn unpublish(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .request(Method::POST, format!("{}/unpublish", self.path()?))?
            .json(body))
    }

    /// Move this entry to a workflow stage
    pub fn set_workflow_stage(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .request(Method::POST, format!("{}/workflow", self.path()?))?
            .json(body))
    }

    /// Import an entry from an exported JSON file
    ///
    /// `locale` and `overwrite` can be set as params beforehand.
    pub fn import(&self, file_name: &str, bytes: Vec<u8>) -> Result<PendingRequest> {
        let part = FormPart::file("entry", file_name, "application/json", bytes);
        Ok(self
            .request(Method::POST, format!("{}/import", self.collection()?))?
            .multipart(vec![part]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        resources::testing::{assert_request, client},
        Error, RequestOptions,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_find_builds_collection_request() {
        let request = client()
            .stack("blt123")
            .content_type(Some("blog"))
            .entry(None)
            .find()
            .unwrap()
            .into_request();
        assert_request(&request, Method::GET, "content_types/blog/entries");
        assert_eq!(request.query_string(), "");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_missing_content_type_uid() {
        let entry = client().stack("blt123").content_type(None).entry(Some("blt1"));
        assert!(matches!(
            entry.fetch(),
            Err(Error::InvalidState(m)) if m == messages::CONTENT_TYPE_UID_REQUIRED
        ));
    }

    #[test]
    fn test_missing_entry_uid() {
        let entry = client().stack("blt123").content_type(Some("blog")).entry(None);
        for result in [entry.fetch(), entry.delete(), entry.export(), entry.publish(json!({}))] {
            assert!(matches!(
                result,
                Err(Error::InvalidState(m)) if m == messages::ENTRY_UID_REQUIRED
            ));
        }
    }

    #[test]
    fn test_single_entry_paths() {
        let entry = client().stack("blt123").content_type(Some("blog")).entry(Some("blt1"));
        assert_request(
            &entry.version_name(2, json!({"entry": {"_version_name": "v2"}})).unwrap().into_request(),
            Method::POST,
            "content_types/blog/entries/blt1/versions/2/name",
        );
        assert_request(
            &entry.languages().unwrap().into_request(),
            Method::GET,
            "content_types/blog/entries/blt1/locales",
        );
        assert_request(
            &entry.set_workflow_stage(json!({})).unwrap().into_request(),
            Method::POST,
            "content_types/blog/entries/blt1/workflow",
        );
    }

    #[test]
    fn test_localize_scopes_locale_to_call() {
        let entry = client().stack("blt123").content_type(Some("blog")).entry(Some("blt1"));
        let request = entry.localize("fr-fr", json!({"entry": {}})).unwrap().into_request();
        assert_request(&request, Method::PUT, "content_types/blog/entries/blt1");
        assert_eq!(request.query_string(), "locale=fr-fr");
        assert!(entry.params().is_empty());
        assert!(matches!(entry.unlocalize(""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_publish_with_references() {
        let request = client()
            .stack("blt123")
            .content_type(Some("blog"))
            .entry(None)
            .publish_with_references(json!({"entries": []}))
            .unwrap()
            .into_request();
        assert_request(&request, Method::POST, "bulk/publish");
        assert_eq!(request.query_string(), "approvals=true&x-bulk-action=publish");
    }
}
