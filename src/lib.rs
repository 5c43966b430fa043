pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main endpoint types for easier access
pub use error::{EndpointError, SettingsError};
pub use models::{EndpointParts, ProxyEndpoint, ProxyEndpointBuilder, ProxyScheme, PORT_UNSPECIFIED};

// Re-export configuration types
pub use settings::ProxyListSettings;
