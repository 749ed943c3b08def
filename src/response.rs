//! Buffered responses and conversions
//!
//! The transport reads the whole body into memory before handing back a
//! [`RawResponse`], so every conversion below is a pure function of the
//! buffered bytes and can be called as many times as needed.
//!
//! # Example
//!
//! ```no_run
//! # use contentstack_management::{Client, EntryResponse};
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! let response = client
//!     .stack("blt123")
//!     .content_type(Some("blog"))
//!     .entry(Some("blt456"))
//!     .fetch()?
//!     .send()
//!     .await?;
//!
//! if response.is_success() {
//!     let entry: EntryResponse = response.to_model()?;
//!     println!("{:?}", entry.entry.title);
//! } else if let Some(err) = response.api_error()? {
//!     println!("{:?}: {:?}", err.error_code(), err.error_message());
//! }
//! # Ok(())
//! # }
//! ```

use crate::{
    errors::{messages, ApiError, Error, Result},
    util::header_str,
};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

/// A response with its body fully buffered
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RawResponse {
    /// Create a response from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Single header value as a string
    pub fn header(&self, name: &str) -> Option<String> {
        header_str(&self.headers, name)
    }

    /// Request ID from the x-request-id header
    pub fn request_id(&self) -> Option<String> {
        self.header("x-request-id")
    }

    /// Raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8; empty when there is no body
    pub fn as_string(&self) -> Result<String> {
        String::from_utf8(self.body.clone())
            .map_err(|e| Error::Io(format!("response body is not valid UTF-8: {}", e)))
    }

    /// Body parsed as a JSON tree
    pub fn as_json(&self) -> Result<serde_json::Value> {
        as_json_str(&self.as_string()?)
    }

    /// Body projected onto a typed model
    pub fn to_model<T: DeserializeOwned>(&self) -> Result<T> {
        model_from_str(&self.as_string()?)
    }

    /// Decode the Contentstack error envelope of a non-2xx response
    ///
    /// Returns `Ok(None)` for successful responses and for error responses
    /// whose body is not an error envelope.
    pub fn api_error(&self) -> Result<Option<ApiError>> {
        if self.is_success() {
            return Ok(None);
        }
        let text = self.as_string()?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let envelope: ApiError = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) => return Ok(None),
        };
        if envelope.error_code.is_none() && envelope.error_message.is_none() {
            return Ok(None);
        }
        Ok(Some(envelope))
    }

    /// Turn a non-2xx response into [`Error::Api`]
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let status = self.status.as_u16();
        let request_id = self.request_id();
        let envelope = self.api_error().ok().flatten();
        Err(Error::Api {
            status,
            error_code: envelope.as_ref().and_then(|e| e.error_code),
            message: envelope
                .and_then(|e| e.error_message)
                .unwrap_or_else(|| format!("HTTP error {}", status)),
            request_id,
        })
    }
}

/// Parse text as a JSON tree
pub fn as_json_str(text: &str) -> Result<serde_json::Value> {
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(text).map_err(Error::from)
}

/// Project text onto a typed model
pub fn model_from_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    if text.trim().is_empty() {
        return Err(Error::InvalidArgument(messages::MODEL_TEXT_REQUIRED.to_string()));
    }
    serde_json::from_str(text).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Branch, BranchResponse};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn response(status: u16, body: &str) -> RawResponse {
        let mut headers = HeaderMap::new();
        let _ = headers.insert("x-request-id", http::HeaderValue::from_static("req-9"));
        RawResponse::new(
            StatusCode::from_u16(status).unwrap(),
            headers,
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn test_as_string_repeatable() {
        let resp = response(200, r#"{"notice":"ok"}"#);
        assert_eq!(resp.as_string().unwrap(), r#"{"notice":"ok"}"#);
        assert_eq!(resp.as_string().unwrap(), r#"{"notice":"ok"}"#);
        assert_eq!(resp.request_id(), Some("req-9".to_string()));
    }

    #[test]
    fn test_empty_body() {
        let resp = response(204, "");
        assert_eq!(resp.as_string().unwrap(), "");
        assert_eq!(resp.as_json().unwrap(), serde_json::Value::Null);
        assert!(matches!(
            resp.to_model::<BranchResponse>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let resp = RawResponse::new(StatusCode::OK, HeaderMap::new(), vec![0xff, 0xfe]);
        assert!(matches!(resp.as_string(), Err(Error::Io(_))));
    }

    #[test]
    fn test_as_json_is_structural() {
        let resp = response(200, r#"{"branch":{"uid":"dev"}}"#);
        assert_eq!(resp.as_json().unwrap(), json!({"branch": {"uid": "dev"}}));
    }

    #[test]
    fn test_to_model_shape_mismatch() {
        let resp = response(200, r#"{"branch": "not an object"}"#);
        assert!(matches!(
            resp.to_model::<BranchResponse>(),
            Err(Error::Deserialize(_))
        ));
    }

    #[test]
    fn test_model_projection_round_trip() {
        let text = r#"{"uid":"dev","source":"main","alias":[{"uid":"staging"}],"custom":"x"}"#;
        let branch: Branch = model_from_str(text).unwrap();
        let reparsed: Branch = model_from_str(&serde_json::to_string(&branch).unwrap()).unwrap();
        assert_eq!(reparsed, branch);
        assert_eq!(reparsed.uid.as_deref(), Some("dev"));
        assert_eq!(reparsed.source.as_deref(), Some("main"));
    }

    #[test]
    fn test_api_error_envelope() {
        let resp = response(
            422,
            r#"{"errors": {"title": ["is required"]}, "error_message": "bad", "error_code": 141}"#,
        );
        let err = resp.api_error().unwrap().unwrap();
        assert_eq!(err.error_code(), Some(141));
        assert_eq!(err.error_message(), Some("bad"));

        assert!(response(200, r#"{"error_code": 1}"#).api_error().unwrap().is_none());
        assert!(response(502, "<html>bad gateway</html>").api_error().unwrap().is_none());
    }

    #[test]
    fn test_error_for_status() {
        let err = response(404, r#"{"error_message":"Entry was not found","error_code":141}"#)
            .error_for_status()
            .unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.error_code(), Some(141));
        assert_eq!(err.request_id(), Some("req-9"));

        let err = response(500, "").error_for_status().unwrap_err();
        assert!(err.to_string().contains("HTTP error 500"));

        assert!(response(201, "{}").error_for_status().is_ok());
    }
}
