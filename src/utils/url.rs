//! URL encoding/decoding utilities

use log::debug;

/// Percent-encodes a user-info component
///
/// Every UTF-8 byte outside the unreserved set (`A-Z a-z 0-9 - . _ ~`) is
/// written as `%XX`, so a space becomes `%20` and `:`/`@` never leak into the
/// authority.
///
/// # Examples
/// ```
/// use proxy_endpoint::utils::url::url_encode;
///
/// let encoded = url_encode("a b:c@d");
/// assert_eq!(encoded, "a%20b%3Ac%40d");
/// ```
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decodes a percent-encoded user-info component
///
/// Returns the original string if the decoded bytes are not valid UTF-8.
///
/// # Examples
/// ```
/// use proxy_endpoint::utils::url::url_decode;
///
/// let decoded = url_decode("a%20b%3Ac");
/// assert_eq!(decoded, "a b:c");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|err| {
            debug!("Keeping undecodable component '{}': {}", input, err);
            input.to_string()
        })
}
