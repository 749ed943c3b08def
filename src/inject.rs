//! Default header injection
//!
//! Every request leaving the client passes through a [`HeaderInjector`]. It
//! stamps the client identification, user agent and content type headers and,
//! when a token is configured, the auth header.

use crate::{auth::Auth, request::Request};

/// Client identification prefix used in `X-User-Agent` and `User-Agent`
pub const CLIENT_NAME: &str = "contentstack-management-rust";

/// Client identification header
pub const X_USER_AGENT: &str = "X-User-Agent";

/// Early access feature header
pub const EARLY_ACCESS_HEADER: &str = "x-header-ea";

/// Header injector applied to every outgoing request
#[derive(Debug, Clone)]
pub struct HeaderInjector {
    client_id: String,
    user_agent: String,
    auth: Option<Auth>,
    early_access: Option<String>,
}

impl HeaderInjector {
    /// Create an injector with an optional auth token and user agent suffix
    pub fn new(auth: Option<Auth>, user_agent_suffix: Option<&str>) -> Self {
        let client_id = format!("{}/{}", CLIENT_NAME, crate::VERSION);
        let mut user_agent = default_user_agent(std::env::consts::OS, std::env::consts::ARCH);
        if let Some(suffix) = user_agent_suffix {
            user_agent.push(' ');
            user_agent.push_str(suffix);
        }

        Self {
            client_id,
            user_agent,
            auth,
            early_access: None,
        }
    }

    /// Send early access feature flags with every request
    pub fn with_early_access(mut self, features: &[String]) -> Self {
        self.early_access = if features.is_empty() {
            None
        } else {
            Some(features.join(","))
        };
        self
    }

    /// The `User-Agent` value this injector sets
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Whether an auth token is configured
    pub fn has_auth(&self) -> bool {
        self.auth.is_some()
    }

    /// Stamp the default headers onto a request
    pub fn inject(&self, request: &mut Request) {
        request.set_header(X_USER_AGENT, self.client_id.clone());
        request.set_header("User-Agent", self.user_agent.clone());

        // Multipart bodies get their boundary content type from the transport.
        if request.body().map_or(true, |body| !body.is_multipart()) {
            request.set_header("Content-Type", "application/json");
        }

        if let Some(features) = &self.early_access {
            request.set_header(EARLY_ACCESS_HEADER, features.clone());
        }

        if let Some(auth) = &self.auth {
            let (name, value) = auth.header();
            if !request.has_header(name) {
                request.set_header(name, value);
            }
        }
    }
}

fn default_user_agent(os: &str, arch: &str) -> String {
    if os.is_empty() {
        format!("{}/{}", CLIENT_NAME, crate::VERSION)
    } else {
        format!("{}/{} ({}; {})", CLIENT_NAME, crate::VERSION, os, arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Body, Request};
    use http::Method;

    #[test]
    fn test_injects_identification_without_auth() {
        let injector = HeaderInjector::new(None, None);
        let mut request = Request::new(Method::GET, "content_types");
        injector.inject(&mut request);

        let headers = request.headers();
        assert!(headers.contains_key(X_USER_AGENT));
        assert!(headers.contains_key("User-Agent"));
        assert_eq!(headers.get("Content-Type").map(String::as_str), Some("application/json"));
        assert!(!request.has_header("authtoken"));
        assert!(!request.has_header("authorization"));
    }

    #[test]
    fn test_injects_authtoken() {
        let injector = HeaderInjector::new(Some(Auth::authtoken("blt-token")), None);
        let mut request = Request::new(Method::GET, "stacks");
        injector.inject(&mut request);
        assert_eq!(request.headers().get("authtoken").map(String::as_str), Some("blt-token"));
    }

    #[test]
    fn test_does_not_override_caller_auth() {
        let injector = HeaderInjector::new(Some(Auth::management_token("default")), None);
        let mut request = Request::new(Method::GET, "stacks");
        request.set_header("authorization", "per-request");
        injector.inject(&mut request);
        assert_eq!(
            request.headers().get("authorization").map(String::as_str),
            Some("per-request")
        );
    }

    #[test]
    fn test_multipart_skips_content_type() {
        let injector = HeaderInjector::new(None, None);
        let mut request = Request::new(Method::POST, "assets");
        request.set_body(Body::multipart(Vec::new()));
        injector.inject(&mut request);
        assert!(!request.has_header("Content-Type"));
    }

    #[test]
    fn test_early_access_header() {
        let features = vec!["taxonomy".to_string(), "nested-ref".to_string()];
        let injector = HeaderInjector::new(None, None).with_early_access(&features);
        let mut request = Request::new(Method::GET, "taxonomies");
        injector.inject(&mut request);
        assert_eq!(request.header(EARLY_ACCESS_HEADER), Some("taxonomy,nested-ref"));

        let injector = HeaderInjector::new(None, None).with_early_access(&[]);
        let mut request = Request::new(Method::GET, "taxonomies");
        injector.inject(&mut request);
        assert!(!request.has_header(EARLY_ACCESS_HEADER));
    }

    #[test]
    fn test_user_agent_fallback_and_suffix() {
        assert_eq!(
            default_user_agent("", ""),
            format!("{}/{}", CLIENT_NAME, crate::VERSION)
        );
        assert!(default_user_agent("linux", "x86_64").ends_with("(linux; x86_64)"));

        let injector = HeaderInjector::new(None, Some("my-app/1.2"));
        assert!(injector.user_agent().ends_with(" my-app/1.2"));
        assert!(!injector.has_auth());
    }
}
