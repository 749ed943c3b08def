use crate::{
    client::Client,
    errors::{messages, Result},
    request::{impl_request_options, require, Accumulator, PendingRequest},
    util::encode_path,
};
use http::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Locales of a stack, addressed by locale code
#[derive(Debug, Clone)]
pub struct Locale {
    client: Client,
    options: Accumulator,
    code: Option<String>,
}

impl_request_options!(Locale);

impl Locale {
    pub(crate) fn new(client: Client, headers: BTreeMap<String, String>, code: Option<String>) -> Self {
        Self {
            client,
            options: Accumulator::seeded(headers),
            code,
        }
    }

    fn path(&self) -> Result<String> {
        let code = require(&self.code, messages::LOCALE_CODE_REQUIRED)?;
        Ok(format!("locales/{}", encode_path(code)))
    }

    /// List locales
    pub fn find(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, "locales")
    }

    /// Fetch this locale
    pub fn fetch(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::GET, self.path()?)
    }

    /// Add a locale from `{"locale": {"code": ..., "name": ...}}`
    pub fn create(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::POST, "locales")?
            .json(body))
    }

    /// Update this locale
    pub fn update(&self, body: Value) -> Result<PendingRequest> {
        Ok(self
            .options
            .request(&self.client, Method::PUT, self.path()?)?
            .json(body))
    }

    /// Delete this locale
    pub fn delete(&self) -> Result<PendingRequest> {
        self.options.request(&self.client, Method::DELETE, self.path()?)
    }

    /// Add a locale with a fallback: `{"locale": {"code": ..., "fallback_locale": ...}}`
    pub fn set_fallback(&self, body: Value) -> Result<PendingRequest> {
        self.create(body)
    }

    /// Change the fallback of this locale
    pub fn update_fallback(&self, body: Value) -> Result<PendingRequest> {
        self.update(body)
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
    fn test_paths() {
        let locale = client().stack("blt123").locale(Some("fr-fr"));
        assert_request(&locale.fetch().unwrap().into_request(), Method::GET, "locales/fr-fr");
        assert_request(
            &locale
                .update_fallback(json!({"locale": {"fallback_locale": "en-us"}}))
                .unwrap()
                .into_request(),
            Method::PUT,
            "locales/fr-fr",
        );
        assert_request(
            &client().stack("blt123").locale(None).set_fallback(json!({})).unwrap().into_request(),
            Method::POST,
            "locales",
        );
    }

    #[test]
    fn test_code_required() {
        let locale = client().stack("blt123").locale(None);
        assert!(matches!(
            locale.delete(),
            Err(Error::InvalidState(m)) if m == messages::LOCALE_CODE_REQUIRED
        ));
    }
}
