use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use url::{Host, Position, Url};

use crate::error::EndpointError;
use crate::models::{ProxyEndpoint, PORT_UNSPECIFIED};
use crate::utils::url::url_decode;

/// Base used to check scheme-less inputs such as `//host:port`.
/// The scheme is non-special so host and port are kept verbatim.
pub(crate) const SCHEME_RELATIVE_BASE: &str = "endpoint://base";

/// Characters ending the authority component.
const AUTHORITY_END: &[char] = &['/', '?', '#', '\\'];

static SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").unwrap());
static SCHEME_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());

/// Checks a scheme against `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub fn is_valid_scheme(scheme: &str) -> bool {
    SCHEME_RE.is_match(scheme)
}

/// Runs `uri` through the `url` parser to check its syntax. Scheme-less
/// references are resolved against [`SCHEME_RELATIVE_BASE`].
pub(crate) fn check_syntax(uri: &str, has_scheme: bool) -> Result<Url, url::ParseError> {
    if has_scheme {
        Url::parse(uri)
    } else {
        Url::parse(SCHEME_RELATIVE_BASE)?.join(uri)
    }
}

/// Splits raw (still percent-encoded) user-info into username and password.
///
/// Splits on the first `:` only, so later colons stay in the password. Each
/// part is percent-decoded and an empty part becomes `None`.
pub fn split_user_info(user_info: &str) -> (Option<String>, Option<String>) {
    let mut parts = user_info.splitn(2, ':');
    let username = parts
        .next()
        .filter(|s| !s.is_empty())
        .map(url_decode);
    let password = parts
        .next()
        .filter(|s| !s.is_empty())
        .map(url_decode);
    (username, password)
}

/// Converts a parsed URI into an endpoint, keeping the URI's scheme.
///
/// Values are read through the `url` accessors, so they carry that crate's
/// normalization (lowercased special-scheme hosts, elided default ports).
/// Parse the raw string with [`parse_endpoint`] to keep them as written.
pub fn endpoint_from_url(url: &Url) -> Result<ProxyEndpoint, EndpointError> {
    let host = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_owned(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        _ => return Err(EndpointError::MissingHost),
    };
    let port = url.port().map(i32::from).unwrap_or(PORT_UNSPECIFIED);
    let (username, password) =
        split_user_info(&url[Position::BeforeUsername..Position::AfterPassword]);

    Ok(ProxyEndpoint::from_parts(
        host,
        port,
        Some(url.scheme()),
        username.as_deref(),
        password.as_deref(),
    ))
}

/// Parses a raw endpoint string.
///
/// Accepts `scheme://[userinfo@]host[:port]`, and the scheme-less forms
/// `//[userinfo@]host[:port]` and `[userinfo@]host[:port]`, which yield an
/// endpoint without a scheme. Syntax is checked with the `url` parser, but
/// every field is taken from the text as written: scheme and host keep their
/// case, an explicit default port is kept, and IPv6 brackets are stripped.
pub fn parse_endpoint(input: &str) -> Result<ProxyEndpoint, EndpointError> {
    let input = input.trim();
    let invalid = |source| EndpointError::InvalidUri {
        uri: input.to_owned(),
        source,
    };

    let (scheme, rest) = match input.split_once("://") {
        Some((scheme, rest)) if SCHEME_PREFIX_RE.is_match(input) => {
            check_syntax(input, true).map_err(invalid)?;
            (Some(scheme), rest)
        }
        _ => {
            let rest = input.strip_prefix("//").unwrap_or(input);
            let url = check_syntax(&format!("//{}", rest), false).map_err(invalid)?;
            debug!("Parsed scheme-less endpoint '{}' as '{}'", input, url);
            (None, rest)
        }
    };

    let authority = &rest[..rest.find(AUTHORITY_END).unwrap_or(rest.len())];
    let (user_info, host_port) = match authority.rfind('@') {
        Some(at) => (&authority[..at], &authority[at + 1..]),
        None => ("", authority),
    };
    let (host, port) = split_host_port(host_port).map_err(invalid)?;
    if host.is_empty() {
        return Err(EndpointError::MissingHost);
    }
    let (username, password) = split_user_info(user_info);

    Ok(ProxyEndpoint::from_parts(
        host,
        port,
        scheme,
        username.as_deref(),
        password.as_deref(),
    ))
}

/// Splits `host[:port]` or `[ipv6][:port]`; an empty port is unspecified.
fn split_host_port(host_port: &str) -> Result<(&str, i32), url::ParseError> {
    let (host, port) = match host_port.strip_prefix('[') {
        Some(bracketed) => {
            let close = bracketed
                .find(']')
                .ok_or(url::ParseError::InvalidIpv6Address)?;
            let port = match &bracketed[close + 1..] {
                "" => None,
                after => Some(
                    after
                        .strip_prefix(':')
                        .ok_or(url::ParseError::InvalidPort)?,
                ),
            };
            (&bracketed[..close], port)
        }
        None => match host_port.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        },
    };

    let port = match port {
        None | Some("") => PORT_UNSPECIFIED,
        Some(port) => port
            .parse::<u16>()
            .map(i32::from)
            .map_err(|_| url::ParseError::InvalidPort)?,
    };
    Ok((host, port))
}
