//! Request building
//!
//! Every resource client composes an [`Accumulator`], the mutable header and
//! query-parameter maps a caller can adjust between calls. Operation methods
//! snapshot the accumulator into a [`Request`] and hand it back wrapped in a
//! [`PendingRequest`], which must be submitted explicitly.
//!
//! Building a request does not clear the accumulator: params added on a client
//! instance apply to every later call on that instance until
//! [`RequestOptions::clear_params`] or [`RequestOptions::remove_param`] is
//! called. Use [`PendingRequest::with_param`] for a param scoped to one call.
//!
//! # Example
//!
//! ```no_run
//! # use contentstack_management::{Client, RequestOptions};
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! let mut entries = client.stack("blt123").content_type(Some("blog")).entry(None);
//! entries.add_param("include_count", true)?;
//!
//! let response = entries
//!     .find()?
//!     .with_param("locale", "fr-fr")
//!     .send()
//!     .await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

use crate::{
    client::Client,
    errors::{messages, Error, Result},
    response::RawResponse,
    retry::{send_with_retry, Callback, RetryCallback},
    util::{encode_query, generate_request_id},
};
use http::Method;
use std::collections::BTreeMap;
use tracing::{debug, trace};

pub(crate) const API_KEY_HEADER: &str = "api_key";

/// A fully specified, unsent request
///
/// The path is relative to the API version root (`https://api.contentstack.io/v3/`).
/// Header names are unique ignoring ASCII case; query parameters are kept
/// ordered by key.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    path: String,
    headers: BTreeMap<String, String>,
    query: BTreeMap<String, String>,
    body: Option<Body>,
}

impl Request {
    /// Create an empty request for a verb and path
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: BTreeMap::new(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    /// HTTP verb
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the API version root
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Request headers
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Query parameters
    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Request body, if any
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Look up a header ignoring ASCII case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether a header is present, ignoring ASCII case
    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// Set a header, replacing any existing header with the same name
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(&name));
        let _ = self.headers.insert(name, value.into());
    }

    /// Set a query parameter
    pub fn set_query(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let _ = self.query.insert(key.into(), value.into());
    }

    /// Set the body
    pub fn set_body(&mut self, body: Body) {
        self.body = Some(body);
    }

    /// Encoded query string without the leading `?`, empty when there are no params
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{}={}", encode_query(k), encode_query(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Path followed by the query string, if any
    pub fn path_and_query(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query)
        }
    }
}

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// JSON document
    Json(serde_json::Value),
    /// Multipart form (uploads and imports)
    Multipart(Vec<FormPart>),
}

impl Body {
    /// Create a multipart body
    pub fn multipart(parts: Vec<FormPart>) -> Self {
        Body::Multipart(parts)
    }

    /// Whether this is a multipart body
    pub fn is_multipart(&self) -> bool {
        matches!(self, Body::Multipart(_))
    }

    /// The JSON payload, if this is a JSON body
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::Multipart(_) => None,
        }
    }
}

/// One field of a multipart form
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    /// Form field name
    pub name: String,
    /// Field content
    pub value: FormValue,
}

/// Content of a multipart field
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    /// Plain text field
    Text(String),
    /// File field
    File {
        /// File name sent in the content disposition
        file_name: String,
        /// MIME type
        content_type: String,
        /// File bytes
        bytes: Vec<u8>,
    },
}

impl FormPart {
    /// Create a text field
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    /// Create a file field
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File {
                file_name: file_name.into(),
                content_type: content_type.into(),
                bytes,
            },
        }
    }
}

/// Mutable header and param maps owned by a resource client
///
/// Header names are unique ignoring ASCII case: a later write under any
/// casing replaces the earlier entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    headers: BTreeMap<String, String>,
    params: BTreeMap<String, String>,
}

impl Accumulator {
    /// Create an accumulator seeded with inherited headers
    pub fn seeded(headers: BTreeMap<String, String>) -> Self {
        let mut options = Self::default();
        for (name, value) in headers {
            options.set_header(name, value);
        }
        options
    }

    /// Current headers
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Current params
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Header value, matching the name ignoring ASCII case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.drop_header(&key);
        let _ = self.headers.insert(key, value.into());
    }

    fn drop_header(&mut self, key: &str) {
        self.headers.retain(|name, _| !name.eq_ignore_ascii_case(key));
    }

    fn add_header(&mut self, key: &str, value: String) -> Result<()> {
        if key.trim().is_empty() {
            return Err(Error::InvalidArgument(messages::KEY_REQUIRED.to_string()));
        }
        self.set_header(key, value);
        Ok(())
    }

    fn add_param(&mut self, key: &str, value: String) -> Result<()> {
        if key.trim().is_empty() {
            return Err(Error::InvalidArgument(messages::KEY_REQUIRED.to_string()));
        }
        let _ = self.params.insert(key.to_string(), value);
        Ok(())
    }

    /// Snapshot the accumulated state into a pending request
    ///
    /// Fails with `InvalidState` when a stack `api_key` header is present but
    /// blank, so no client derived from a keyless stack reaches the transport.
    pub(crate) fn request(
        &self,
        client: &Client,
        method: Method,
        path: impl Into<String>,
    ) -> Result<PendingRequest> {
        if matches!(self.header(API_KEY_HEADER), Some(key) if key.trim().is_empty()) {
            return Err(Error::InvalidState(messages::API_KEY_REQUIRED.to_string()));
        }
        let mut request = Request::new(method, path);
        for (name, value) in &self.headers {
            request.set_header(name.clone(), value.clone());
        }
        for (key, value) in &self.params {
            request.set_query(key.clone(), value.clone());
        }
        Ok(PendingRequest::new(client.clone(), request))
    }
}

/// Header and param accumulation shared by every resource client
pub trait RequestOptions {
    /// The accumulator backing this client
    fn accumulator(&self) -> &Accumulator;

    /// Mutable access to the accumulator
    fn accumulator_mut(&mut self) -> &mut Accumulator;

    /// Insert or overwrite a header
    fn add_header(&mut self, key: &str, value: impl Into<String>) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.accumulator_mut().add_header(key, value.into())?;
        Ok(self)
    }

    /// Insert or overwrite a query parameter
    fn add_param(&mut self, key: &str, value: impl ToString) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.accumulator_mut().add_param(key, value.to_string())?;
        Ok(self)
    }

    /// Remove a header, matching the name ignoring ASCII case; absent keys are ignored
    fn remove_header(&mut self, key: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.accumulator_mut().drop_header(key);
        self
    }

    /// Remove a query parameter; absent keys are ignored
    fn remove_param(&mut self, key: &str) -> &mut Self
    where
        Self: Sized,
    {
        let _ = self.accumulator_mut().params.remove(key);
        self
    }

    /// Remove every query parameter
    fn clear_params(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.accumulator_mut().params.clear();
        self
    }

    /// Current headers
    fn headers(&self) -> &BTreeMap<String, String> {
        self.accumulator().headers()
    }

    /// Current query parameters
    fn params(&self) -> &BTreeMap<String, String> {
        self.accumulator().params()
    }
}

/// Implements [`RequestOptions`] for a struct with an `options: Accumulator` field
macro_rules! impl_request_options {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::request::RequestOptions for $ty {
                fn accumulator(&self) -> &$crate::request::Accumulator {
                    &self.options
                }

                fn accumulator_mut(&mut self) -> &mut $crate::request::Accumulator {
                    &mut self.options
                }
            }
        )+
    };
}
pub(crate) use impl_request_options;

/// Return the identifier or fail with `InvalidState`
pub(crate) fn require<'a>(value: &'a Option<String>, message: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::InvalidState(message.to_string())),
    }
}

/// An unsent request bound to the client that will dispatch it
///
/// Consumed by [`send`](Self::send), [`send_once`](Self::send_once) or
/// [`enqueue`](Self::enqueue), so it can be submitted only once.
#[derive(Debug)]
#[must_use = "a pending request does nothing until it is sent"]
pub struct PendingRequest {
    client: Client,
    request: Request,
}

impl PendingRequest {
    pub(crate) fn new(client: Client, request: Request) -> Self {
        Self { client, request }
    }

    /// The request that will be sent
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Unwrap the request without sending it
    pub fn into_request(self) -> Request {
        self.request
    }

    /// Add a header to this request only
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.set_header(name, value);
        self
    }

    /// Add a query parameter to this request only
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.request.set_query(key, value.to_string());
        self
    }

    /// Attach a JSON body
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.request.set_body(Body::Json(body));
        self
    }

    /// Attach a multipart body
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.request.set_body(Body::Multipart(parts));
        self
    }

    /// Send the request, retrying failures according to the client's retry policy
    ///
    /// A non-2xx response is returned as `Ok`; inspect it with
    /// [`RawResponse::is_success`] or convert it with
    /// [`RawResponse::error_for_status`].
    pub async fn send(self) -> Result<RawResponse> {
        let (client, request) = self.prepare();
        let policy = client.config().retry.clone();
        send_with_retry(client.transport().as_ref(), request, &policy, |_, _| {}).await
    }

    /// Send the request exactly once
    pub async fn send_once(self) -> Result<RawResponse> {
        let (client, request) = self.prepare();
        client.transport().execute(request).await
    }

    /// Send the request on the tokio runtime and report through a callback
    ///
    /// Failures are resubmitted up to the retry ceiling before
    /// [`Callback::on_failure`] is called.
    pub fn enqueue<C: Callback>(self, callback: C) -> tokio::task::JoinHandle<()> {
        let (client, request) = self.prepare();
        let wrapper = RetryCallback::new(callback, client.config().retry.clone());
        let transport = client.transport().clone();
        tokio::spawn(async move { wrapper.run(transport, request).await })
    }

    fn prepare(self) -> (Client, Request) {
        let Self { client, mut request } = self;
        client.injector().inject(&mut request);

        let request_id = generate_request_id();
        request.set_header("X-Request-ID", request_id.clone());
        debug!(
            "Dispatching {} {} (req={})",
            request.method(),
            request.path(),
            request_id
        );
        trace!("Request query: {:?}", request.query());

        (client, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct Scratch {
        options: Accumulator,
    }

    impl_request_options!(Scratch);

    #[test]
    fn test_add_header_last_write_wins() {
        let mut options = Scratch::default();
        options.add_header("branch", "main").unwrap();
        options.add_header("branch", "develop").unwrap();
        assert_eq!(options.headers().get("branch").map(String::as_str), Some("develop"));
    }

    #[test]
    fn test_header_names_ignore_case() {
        let mut options = Scratch::default();
        options.add_header("branch", "first").unwrap();
        options.add_header("Branch", "second").unwrap();
        assert_eq!(options.headers().len(), 1);
        assert_eq!(options.accumulator().header("BRANCH"), Some("second"));

        options.add_header("X-Custom", "a").unwrap();
        let _ = options.remove_header("x-custom");
        assert_eq!(options.accumulator().header("x-custom"), None);
        assert_eq!(options.headers().len(), 1);
    }

    #[test]
    fn test_seeded_header_is_overridden_by_any_casing() {
        let client = crate::resources::testing::client();
        let mut options = Scratch {
            options: Accumulator::seeded(BTreeMap::from([(
                "api_key".to_string(),
                "blt123".to_string(),
            )])),
        };
        options.add_header("API_KEY", "blt-other").unwrap();

        let request = options
            .accumulator()
            .request(&client, Method::GET, "content_types")
            .unwrap()
            .into_request();
        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.header("api_key"), Some("blt-other"));
    }

    #[test]
    fn test_blank_api_key_never_builds() {
        let client = crate::resources::testing::client();
        let options = Accumulator::seeded(BTreeMap::from([(
            "api_key".to_string(),
            " ".to_string(),
        )]));
        assert!(matches!(
            options.request(&client, Method::GET, "content_types"),
            Err(Error::InvalidState(m)) if m == messages::API_KEY_REQUIRED
        ));
        assert!(Accumulator::default()
            .request(&client, Method::GET, "user")
            .is_ok());
    }

    #[test]
    fn test_add_param_accepts_display_values() {
        let mut options = Scratch::default();
        options
            .add_param("include_count", true)
            .unwrap()
            .add_param("limit", 10)
            .unwrap();
        assert_eq!(options.params().get("include_count").map(String::as_str), Some("true"));
        assert_eq!(options.params().get("limit").map(String::as_str), Some("10"));
    }

    #[test]
    fn test_empty_key_is_invalid_argument() {
        let mut options = Scratch::default();
        assert!(matches!(options.add_header("", "x"), Err(Error::InvalidArgument(_))));
        assert!(matches!(options.add_param("  ", "x"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_remove_missing_param_is_noop() {
        let mut options = Scratch::default();
        options.add_param("locale", "en-us").unwrap();
        let before = options.params().clone();
        let _ = options.remove_param("does_not_exist");
        assert_eq!(options.params(), &before);
    }

    #[test]
    fn test_clear_params_keeps_headers() {
        let mut options = Scratch {
            options: Accumulator::seeded(BTreeMap::from([(
                "api_key".to_string(),
                "blt1".to_string(),
            )])),
        };
        options.add_param("locale", "en-us").unwrap();
        let _ = options.clear_params();
        assert!(options.params().is_empty());
        assert_eq!(options.headers().len(), 1);
    }

    #[test]
    fn test_set_header_is_case_insensitive() {
        let mut request = Request::new(Method::GET, "stacks");
        request.set_header("authtoken", "a");
        request.set_header("AuthToken", "b");
        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.header("authtoken"), Some("b"));
    }

    #[test]
    fn test_query_string_is_sorted_and_encoded() {
        let mut request = Request::new(Method::GET, "content_types/blog/entries");
        assert_eq!(request.query_string(), "");
        assert_eq!(request.path_and_query(), "content_types/blog/entries");

        request.set_query("query", r#"{"title":"a b"}"#);
        request.set_query("locale", "en-us");
        assert_eq!(
            request.query_string(),
            "locale=en-us&query=%7B%22title%22%3A%22a%20b%22%7D"
        );
    }

    #[test]
    fn test_require() {
        assert_eq!(require(&Some("blt1".to_string()), "m").unwrap(), "blt1");
        assert!(matches!(require(&None, "m"), Err(Error::InvalidState(m)) if m == "m"));
        assert!(matches!(require(&Some(" ".to_string()), "m"), Err(Error::InvalidState(_))));
    }
}
