//! Settings module for proxy-endpoint
//!
//! Loads proxy lists from TOML, YAML or JSON configuration

pub mod proxy_list;

// Re-export settings struct
pub use proxy_list::ProxyListSettings;
