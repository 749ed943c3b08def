use crate::{
    auth::Auth,
    errors::Result,
    retry::{RetryOn, RetryPolicy},
    transport::Transport,
    Error,
};
use std::{fmt, sync::Arc, time::Duration};

/// Contentstack data centers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// North America (AWS)
    #[default]
    Na,
    /// Europe (AWS)
    Eu,
    /// Australia (AWS)
    Au,
    /// North America (Azure)
    AzureNa,
    /// Europe (Azure)
    AzureEu,
    /// North America (GCP)
    GcpNa,
    /// Europe (GCP)
    GcpEu,
}

impl Region {
    /// Management API host for the region
    pub fn host(&self) -> &'static str {
        match self {
            Region::Na => crate::DEFAULT_HOST,
            Region::Eu => "eu-api.contentstack.com",
            Region::Au => "au-api.contentstack.com",
            Region::AzureNa => "azure-na-api.contentstack.com",
            Region::AzureEu => "azure-eu-api.contentstack.com",
            Region::GcpNa => "gcp-na-api.contentstack.com",
            Region::GcpEu => "gcp-eu-api.contentstack.com",
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// `https` or `http`
    pub protocol: String,
    /// API host
    pub host: String,
    /// API port
    pub port: u16,
    /// API version path segment
    pub version: String,
    /// Request timeout
    pub timeout: Duration,
    /// Retry policy applied by `PendingRequest::send`
    pub retry: RetryPolicy,
    /// Authentication configuration
    pub auth: Option<Auth>,
    /// User agent suffix
    pub user_agent_suffix: Option<String>,
    /// Early access feature flags sent as `x-header-ea`
    pub early_access: Vec<String>,
}

impl ClientConfig {
    /// Base URL of the versioned API, always ending with `/`
    ///
    /// The port is omitted when it is the protocol default.
    pub fn base_url(&self) -> String {
        let default_port = match self.protocol.as_str() {
            "http" => 80,
            _ => crate::DEFAULT_PORT,
        };
        if self.port == default_port {
            format!("{}://{}/{}/", self.protocol, self.host, self.version)
        } else {
            format!(
                "{}://{}:{}/{}/",
                self.protocol, self.host, self.port, self.version
            )
        }
    }
}

/// Builder for creating a configured Client
pub struct ClientBuilder {
    protocol: String,
    host: String,
    port: u16,
    version: String,
    endpoint: Option<String>,
    auth: Option<Auth>,
    timeout_ms: u64,
    retries: u32,
    retry_on: RetryOn,
    backoff: Option<(Duration, Duration)>,
    user_agent_suffix: Option<String>,
    early_access: Vec<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("version", &self.version)
            .field("endpoint", &self.endpoint)
            .field("auth", &self.auth)
            .field("timeout_ms", &self.timeout_ms)
            .field("retries", &self.retries)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a builder with the default host, port, protocol, version and timeout
    pub fn new() -> Self {
        Self {
            protocol: crate::DEFAULT_PROTOCOL.to_string(),
            host: crate::DEFAULT_HOST.to_string(),
            port: crate::DEFAULT_PORT,
            version: crate::DEFAULT_VERSION.to_string(),
            endpoint: None,
            auth: None,
            timeout_ms: crate::DEFAULT_TIMEOUT_MS,
            retries: crate::DEFAULT_RETRIES,
            retry_on: RetryOn::default(),
            backoff: None,
            user_agent_suffix: None,
            early_access: Vec::new(),
            transport: None,
        }
    }

    /// Set the API host (without scheme)
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Use the host of a Contentstack region
    pub fn region(mut self, region: Region) -> Self {
        self.host = region.host().to_string();
        self
    }

    /// Set the port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the protocol (`https` or `http`)
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Set the API version segment
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set protocol, host and port at once from a URL like `http://127.0.0.1:8080`
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set the authentication method
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Authenticate with a user session token
    pub fn authtoken(self, token: impl Into<String>) -> Self {
        self.auth(Auth::authtoken(token))
    }

    /// Set the request timeout in milliseconds
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the number of retries for failed requests
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Choose which failures are retried
    pub fn retry_on(mut self, retry_on: RetryOn) -> Self {
        self.retry_on = retry_on;
        self
    }

    /// Wait with exponential backoff between retries instead of resubmitting immediately
    pub fn retry_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.backoff = Some((initial, max));
        self
    }

    /// Add a custom user agent suffix
    pub fn user_agent_extra(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Opt into early access features
    pub fn early_access<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.early_access = features.into_iter().map(Into::into).collect();
        self
    }

    /// Use a custom transport instead of the default `reqwest` one
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client with the configured options
    pub fn build(self) -> Result<crate::Client> {
        let (protocol, host, port) = match &self.endpoint {
            Some(url) => parse_endpoint(url)?,
            None => (self.protocol, self.host, self.port),
        };

        if protocol != "https" && protocol != "http" {
            return Err(Error::Config(format!(
                "Unsupported protocol '{}', expected https or http",
                protocol
            )));
        }

        let host = host.trim().trim_end_matches('/').to_string();
        if host.is_empty() || host.contains("://") {
            return Err(Error::Config(
                "Host must be a bare host name such as api.contentstack.io".to_string(),
            ));
        }

        let version = self.version.trim_matches('/').to_string();
        if version.is_empty() {
            return Err(Error::Config("API version must not be empty".to_string()));
        }

        let mut retry = RetryPolicy::new(self.retries).retry_on(self.retry_on);
        if let Some((initial, max)) = self.backoff {
            retry = retry.exponential(initial, max);
        }

        let config = ClientConfig {
            protocol,
            host,
            port,
            version,
            timeout: Duration::from_millis(self.timeout_ms),
            retry,
            auth: self.auth,
            user_agent_suffix: self.user_agent_suffix,
            early_access: self.early_access,
        };

        crate::client::Client::new(config, self.transport)
    }
}

fn parse_endpoint(url: &str) -> Result<(String, String, u16)> {
    let (protocol, rest) = url
        .split_once("://")
        .ok_or_else(|| Error::Config("Endpoint must start with http:// or https://".to_string()))?;
    let authority = rest.split('/').next().unwrap_or_default();

    let default_port = if protocol == "http" { 80 } else { crate::DEFAULT_PORT };
    // A bracketed IPv6 literal carries colons of its own; the port separator follows the `]`.
    let port_separator = match authority.rfind(']') {
        Some(end) => authority[end..].find(':').map(|offset| end + offset),
        None => authority.rfind(':'),
    };
    let (host, port) = match port_separator {
        Some(index) => {
            let port = authority[index + 1..]
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("Invalid port in endpoint '{}'", url)))?;
            (&authority[..index], port)
        }
        None => (authority, default_port),
    };

    Ok((protocol.to_string(), host.to_string(), port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let client = ClientBuilder::new().build().unwrap();
        let config = client.config();
        assert_eq!(config.host, "api.contentstack.io");
        assert_eq!(config.port, 443);
        assert_eq!(config.protocol, "https");
        assert_eq!(config.version, "v3");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry.max_retries(), 3);
        assert_eq!(config.base_url(), "https://api.contentstack.io/v3/");
    }

    #[test]
    fn test_region_and_port() {
        let client = ClientBuilder::new()
            .region(Region::Eu)
            .port(8443)
            .build()
            .unwrap();
        assert_eq!(client.config().base_url(), "https://eu-api.contentstack.com:8443/v3/");
    }

    #[test]
    fn test_endpoint_parsing() {
        let client = ClientBuilder::new()
            .endpoint("http://127.0.0.1:8080")
            .build()
            .unwrap();
        assert_eq!(client.config().base_url(), "http://127.0.0.1:8080/v3/");

        assert_eq!(
            parse_endpoint("https://example.com/").unwrap(),
            ("https".to_string(), "example.com".to_string(), 443)
        );
        assert!(parse_endpoint("example.com").is_err());
        assert!(parse_endpoint("http://example.com:port").is_err());
    }

    #[test]
    fn test_ipv6_endpoint_parsing() {
        assert_eq!(
            parse_endpoint("http://[::1]").unwrap(),
            ("http".to_string(), "[::1]".to_string(), 80)
        );
        assert_eq!(
            parse_endpoint("https://[2001:db8::7]:8443/v3").unwrap(),
            ("https".to_string(), "[2001:db8::7]".to_string(), 8443)
        );
        assert!(parse_endpoint("http://[::1]:").is_err());

        let client = ClientBuilder::new().endpoint("http://[::1]").build().unwrap();
        assert_eq!(client.config().base_url(), "http://[::1]/v3/");
    }

    #[test]
    fn test_builder_validates_host_and_protocol() {
        let result = ClientBuilder::new().host("https://api.contentstack.io").build();
        assert!(matches!(result.unwrap_err(), Error::Config(_)));

        let result = ClientBuilder::new().protocol("ftp").build();
        assert!(matches!(result.unwrap_err(), Error::Config(_)));

        let result = ClientBuilder::new().version("/").build();
        assert!(matches!(result.unwrap_err(), Error::Config(_)));
    }

    #[test]
    fn test_retry_configuration() {
        let client = ClientBuilder::new()
            .retries(5)
            .retry_on(RetryOn::AnyFailure)
            .build()
            .unwrap();
        assert_eq!(client.config().retry.max_retries(), 5);
        assert_eq!(client.config().retry.classification(), RetryOn::AnyFailure);
    }
}
