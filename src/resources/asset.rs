use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, FormPart, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// A file to upload as an asset
///
/// ```
/// use contentstack_management::AssetUpload;
///
/// let upload = AssetUpload::new("logo.png", "image/png", vec![0x89, 0x50])
///     .title("Logo")
///     .tags(["brand", "header"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AssetUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
    title: Option<String>,
    description: Option<String>,
    parent_uid: Option<String>,
    tags: Vec<String>,
}

impl AssetUpload {
    /// Upload `bytes` as `file_name` with the given MIME type
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
            title: None,
            description: None,
            parent_uid: None,
            tags: Vec::new(),
        }
    }

    /// Asset title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Asset description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Folder to place the asset in
    pub fn parent_uid(mut self, parent_uid: impl Into<String>) -> Self {
        self.parent_uid = Some(parent_uid.into());
        self
    }

    /// Asset tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    fn into_parts(self) -> Vec<FormPart> {
        let mut parts = vec![FormPart::file(
            "asset[upload]",
            self.file_name,
            self.content_type,
            self.bytes,
        )];
        if let Some(parent_uid) = self.parent_uid {
            parts.push(FormPart::text("asset[parent_uid]", parent_uid));
        }
        if let Some(title) = self.title {
            parts.push(FormPart::text("asset[title]", title));
        }
        if let Some(description) = self.description {
            parts.push(FormPart::text("asset[description]", description));
        }
        if !self.tags.is_empty() {
            parts.push(FormPart::text("asset[tags]", self.tags.join(",")));
        }
        parts
    }
}

/// Assets and asset folders of a stack
#[derive(Debug, Clone)]
pub struct Asset {
    client: Client,
    options: Accumulator,
    uid: Option<String>,
}

impl_request_options!(Asset);

impl Asset {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, uid: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            uid,
        }
    }

    /// Asset UID, if set
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn path(&self) -> Result<String> {
        let uid = require(&self.uid, messages::ASSET_UID_REQUIRED)?;
        Ok(format!("assets/{}", encode_path(uid)))
    }

    fn folder_path(folder_uid: &str) -> Result<String> {
        let folder_uid = super::non_empty(folder_uid, messages::FOLDER_UID_REQUIRED)?;
        Ok(format!("assets/folders/{}", encode_path(folder_uid)))
    }

    fn request(&self, method: Method, path: impl Into<String>) -> Result<PendingRequest> {
        self.options.request(&self.client, method, path)
    }

    /// List assets
    pub fn find(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "assets")
    }

    /// Fetch this asset
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.request(Method::GET, self.path()?)
    }

    /// Upload a new asset
    pub fn upload(&self, upload: AssetUpload) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "assets")?.multipart(upload.into_parts()))
    }

    /// Replace the file of this asset
    pub fn replace(&self, upload: AssetUpload) -> Result<PendingRequest> {
        Ok(self
            .request(Method::PUT, self.path()?)?
            .multipart(upload.into_parts()))
    }

    /// Update title, description or tags of this asset
    pub fn update_details(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::PUT, self.path()?)?.json(body))
    }

    /// Delete this asset
    pub fn delete(&self) -> Result<PendingRequest> {
        self.request(Method::DELETE, self.path()?)
    }

    /// Assets formatted for the rich text editor
    pub fn rte_information(&self) -> Result<PendingRequest> {
        self.request(Method::GET, "assets/rt")
    }

    /// Assets inside a folder
    pub fn by_folder(&self, folder_uid: &str) -> Result<PendingRequest> {
        let folder_uid = super::non_empty(folder_uid, messages::FOLDER_UID_REQUIRED)?;
        Ok(self
            .request(Method::GET, "assets")?
            .with_param("folder", folder_uid))
    }

    /// Assets and subfolders of a folder
    pub fn subfolders(&self, folder_uid: &str) -> Result<PendingRequest> {
        Ok(self
            .by_folder(folder_uid)?
            .with_param("include_folders", true))
    }

    /// Assets of a type such as `images` or `videos`
    pub fn by_type(&self, asset_type: &str) -> Result<PendingRequest> {
        let asset_type = super::non_empty(asset_type, messages::ASSET_TYPE_REQUIRED)?;
        self.request(Method::GET, format!("assets/{}", encode_path(asset_type)))
    }

    /// Publish this asset
    pub fn publish(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .request(Method::POST, format!("{}/publish", self.path()?))?
            .json(body))
    }

    /// Unpublish this asset
    pub fn unpublish(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .request(Method::POST, format!("{}/unpublish", self.path()?))?
            .json(body))
    }

    /// Versions of this asset
    pub fn versions(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/versions", self.path()?))
    }

    /// Name a version of this asset
    pub fn version_name(&self, version: u32, body: Value) -> Result<PendingRequest> {
        let path = format!("{}/versions/{}/name", self.path()?, version);
        Ok(self.request(Method::POST, path)?.json(body))
    }

    /// Remove the name of a version
    pub fn remove_version_name(&self, version: u32) -> Result<PendingRequest> {
        let path = format!("{}/versions/{}/name", self.path()?, version);
        self.request(Method::DELETE, path)
    }

    /// Entries referring to this asset
    pub fn references(&self) -> Result<PendingRequest> {
        self.request(Method::GET, format!("{}/references", self.path()?))
    }

    /// Fetch a folder
    pub fn fetch_folder(&self, folder_uid: &str) -> Result<PendingRequest> {
        self.request(Method::GET, Self::folder_path(folder_uid)?)
    }

    /// Create a folder from `{"asset": {"name": ..., "parent_uid": ...}}`
    pub fn create_folder(&self, body: Value) -> Result<PendingRequest> {
        Ok(self.request(Method::POST, "assets/folders")?.json(body))
    }

    /// Rename or move a folder
    pub fn update_folder(&self, folder_uid: &str, body: Value) -> Result<PendingRequest> {
        Ok(self
            .request(Method::PUT, Self::folder_path(folder_uid)?)?
            .json(body))
    }

    /// Delete a folder
    pub fn delete_folder(&self, folder_uid: &str) -> Result<PendingRequest> {
        self.request(Method::DELETE, Self::folder_path(folder_uid)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        resources::testing::{assert_request, client},
        Body, Error, FormValue,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_upload_parts() {
        let upload = AssetUpload::new("logo.png", "image/png", vec![1, 2])
            .title("Logo")
            .parent_uid("folder1")
            .tags(["a", "b"]);
        let request = client()
            .stack("blt123")
            .asset(None)
            .upload(upload)
            .unwrap()
            .into_request();
        assert_request(&request, Method::POST, "assets");

        let parts = match request.body() {
            Some(Body::Multipart(parts)) => parts.clone(),
            other => panic!("unexpected body: {:?}", other),
        };
        let names: Vec<_> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["asset[upload]", "asset[parent_uid]", "asset[title]", "asset[tags]"]
        );
        assert!(matches!(&parts[0].value, FormValue::File { file_name, .. } if file_name == "logo.png"));
        assert_eq!(parts[3].value, FormValue::Text("a,b".to_string()));
    }

    #[test]
    fn test_uid_required() {
        let asset = client().stack("blt123").asset(None);
        for result in [
            asset.fetch(),
            asset.delete(),
            asset.versions(),
            asset.remove_version_name(1),
            asset.replace(AssetUpload::new("a.txt", "text/plain", Vec::new())),
        ] {
            assert!(matches!(
                result,
                Err(Error::InvalidState(m)) if m == messages::ASSET_UID_REQUIRED
            ));
        }
    }

    #[test]
    fn test_folder_queries() {
        let asset = client().stack("blt123").asset(None);
        let request = asset.subfolders("folder1").unwrap().into_request();
        assert_request(&request, Method::GET, "assets");
        assert_eq!(request.query_string(), "folder=folder1&include_folders=true");

        assert_request(
            &asset.delete_folder("folder1").unwrap().into_request(),
            Method::DELETE,
            "assets/folders/folder1",
        );
        assert!(matches!(asset.fetch_folder(""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_version_paths() {
        let asset = client().stack("blt123").asset(Some("blt9"));
        assert_request(
            &asset.version_name(3, json!({})).unwrap().into_request(),
            Method::POST,
            "assets/blt9/versions/3/name",
        );
        assert_request(
            &asset.remove_version_name(3).unwrap().into_request(),
            Method::DELETE,
            "assets/blt9/versions/3/name",
        );
        assert_request(&asset.by_type("images").unwrap().into_request(), Method::GET, "assets/images");
    }
}
