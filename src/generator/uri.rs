use url::Url;

use crate::error::EndpointError;
use crate::models::{ProxyEndpoint, PORT_UNSPECIFIED};
use crate::parser::uri::{check_syntax, is_valid_scheme};
use crate::utils::url::url_encode;

/// Characters that would end or split the authority if left in a host.
const FORBIDDEN_HOST_CHARS: &[char] = &['/', '?', '#', '@', ' ', '\t', '\r', '\n'];

/// Builds the percent-encoded user-info, or `None` if it would be empty.
pub fn user_info(endpoint: &ProxyEndpoint) -> Option<String> {
    let mut user_info = String::new();
    if let Some(username) = endpoint.username() {
        user_info.push_str(&url_encode(username));
    }
    if let Some(password) = endpoint.password() {
        user_info.push(':');
        user_info.push_str(&url_encode(password));
    }
    if user_info.is_empty() {
        None
    } else {
        Some(user_info)
    }
}

/// Writes `[scheme:]//[userinfo@]host[:port]` without validating anything.
pub fn compose(endpoint: &ProxyEndpoint) -> String {
    let mut uri = String::new();
    if let Some(scheme) = endpoint.scheme() {
        uri.push_str(scheme);
        uri.push(':');
    }
    uri.push_str("//");
    if let Some(user_info) = user_info(endpoint) {
        uri.push_str(&user_info);
        uri.push('@');
    }

    let host = endpoint.host();
    if host.contains(':') && !host.starts_with('[') {
        uri.push('[');
        uri.push_str(host);
        uri.push(']');
    } else {
        uri.push_str(host);
    }

    if endpoint.port() != PORT_UNSPECIFIED {
        uri.push(':');
        uri.push_str(&endpoint.port().to_string());
    }
    uri
}

/// Composes the endpoint's URI and checks that it is syntactically valid.
pub fn to_uri(endpoint: &ProxyEndpoint) -> Result<String, EndpointError> {
    if let Some(scheme) = endpoint.scheme() {
        if !is_valid_scheme(scheme) {
            return Err(EndpointError::InvalidScheme(scheme.to_owned()));
        }
    }

    let port = endpoint.port();
    if port != PORT_UNSPECIFIED && !(0..=i32::from(u16::MAX)).contains(&port) {
        return Err(EndpointError::InvalidPort(port));
    }

    let host = endpoint.host();
    if host.is_empty() {
        return Err(EndpointError::EmptyHost);
    }

    let uri = compose(endpoint);
    if host.contains(FORBIDDEN_HOST_CHARS) {
        return Err(EndpointError::InvalidUri {
            uri,
            source: url::ParseError::InvalidDomainCharacter,
        });
    }

    match check_syntax(&uri, endpoint.scheme().is_some()) {
        Ok(url) if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(uri),
        Ok(_) => Err(EndpointError::InvalidUri {
            uri,
            source: url::ParseError::EmptyHost,
        }),
        Err(source) => Err(EndpointError::InvalidUri { uri, source }),
    }
}

/// Converts the endpoint into a [`Url`]. The endpoint must carry a scheme.
pub fn to_url(endpoint: &ProxyEndpoint) -> Result<Url, EndpointError> {
    if endpoint.scheme().is_none() {
        return Err(EndpointError::MissingScheme);
    }
    let uri = to_uri(endpoint)?;
    Url::parse(&uri).map_err(|source| EndpointError::InvalidUri { uri, source })
}
