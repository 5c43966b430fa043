use thiserror::Error;

/// Errors raised while converting between endpoints and URIs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("Invalid URI '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid scheme: {0}")]
    InvalidScheme(String),

    #[error("Invalid port: {0}")]
    InvalidPort(i32),

    #[error("Host must not be empty")]
    EmptyHost,

    #[error("URI has no host")]
    MissingHost,

    #[error("Endpoint has no scheme")]
    MissingScheme,
}

/// Errors raised while loading a proxy list.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Endpoint error: {0}")]
    Endpoint(#[from] EndpointError),
}
