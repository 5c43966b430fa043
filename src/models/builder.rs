//! Fluent construction of proxy endpoints

use super::endpoint::{ProxyEndpoint, PORT_UNSPECIFIED};

/// Builder for [`ProxyEndpoint`]. Fields not set stay absent.
///
/// ```
/// use proxy_endpoint::ProxyEndpointBuilder;
///
/// let endpoint = ProxyEndpointBuilder::new("10.0.0.1")
///     .port(1080)
///     .scheme("socks5")
///     .build();
/// assert_eq!(endpoint.to_string(), "socks5://10.0.0.1:1080");
/// ```
#[derive(Debug, Clone)]
pub struct ProxyEndpointBuilder {
    host: String,
    port: i32,
    scheme: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl ProxyEndpointBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        ProxyEndpointBuilder {
            host: host.into(),
            port: PORT_UNSPECIFIED,
            scheme: None,
            username: None,
            password: None,
        }
    }

    pub fn port(mut self, port: i32) -> Self {
        self.port = port;
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn build(self) -> ProxyEndpoint {
        ProxyEndpoint::from_parts(
            self.host,
            self.port,
            self.scheme.as_deref(),
            self.username.as_deref(),
            self.password.as_deref(),
        )
    }
}
