//! Request submission
//!
//! [`Transport`] is the seam between the SDK and the network. The default
//! [`HttpTransport`] sends requests with `reqwest`; tests and callers with
//! special needs can plug their own implementation into
//! [`ClientBuilder::transport`](crate::ClientBuilder::transport).

use crate::{
    errors::{Error, Result},
    request::{Body, FormPart, FormValue, Request},
    response::RawResponse,
};
use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client as HttpClient,
};
use std::time::Duration;
use tracing::trace;

/// Submits a request and returns the buffered response
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Send one request
    ///
    /// Any HTTP status is a successful exchange; only failures to complete
    /// the exchange are errors.
    async fn execute(&self, request: Request) -> Result<RawResponse>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport rooted at `base_url` (e.g. `https://api.contentstack.io/v3/`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { http, base_url })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request
    pub fn url_for(&self, request: &Request) -> String {
        format!(
            "{}{}",
            self.base_url,
            request.path_and_query().trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse> {
        let url = self.url_for(&request);
        trace!("{} {}", request.method(), url);

        let mut builder = self.http.request(request.method().clone(), &url);
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body() {
            Some(Body::Json(value)) => builder.body(serde_json::to_vec(value)?),
            Some(Body::Multipart(parts)) => builder.multipart(form(parts)?),
            None => builder,
        };

        let response = builder.send().await.map_err(Error::from)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Error::from)?;

        Ok(RawResponse::new(status, headers, body.to_vec()))
    }
}

fn form(parts: &[FormPart]) -> Result<Form> {
    let mut form = Form::new();
    for part in parts {
        form = match &part.value {
            FormValue::Text(text) => form.text(part.name.clone(), text.clone()),
            FormValue::File {
                file_name,
                content_type,
                bytes,
            } => {
                let file = Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str(content_type)
                    .map_err(|e| Error::InvalidArgument(format!("invalid content type: {}", e)))?;
                form.part(part.name.clone(), file)
            }
        };
    }
    Ok(form)
}
