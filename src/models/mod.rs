//! Core data models for the application
//!
//! This module contains the endpoint value type and its helpers, separated
//! from the URI parsing and generation logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use proxy_endpoint::models::{ProxyEndpoint, ProxyScheme};
//!
//! let endpoint = ProxyEndpoint::with_scheme("10.0.0.1", 1080, "socks5");
//! assert_eq!(endpoint.proxy_scheme(), Some(ProxyScheme::Socks5));
//! ```
//!
//! # Working with Option fields
//!
//! Scheme and credentials are `Option`s; `None` means "not given" and is never
//! the same as an empty string:
//!
//! ```rust
//! use proxy_endpoint::ProxyEndpoint;
//!
//! let endpoint = ProxyEndpoint::new("proxy", 3128);
//! let scheme = endpoint.scheme().unwrap_or("http");
//! assert_eq!(scheme, "http");
//! ```

mod builder;
mod endpoint;
mod scheme;

pub use builder::ProxyEndpointBuilder;
pub use endpoint::*;
pub use scheme::ProxyScheme;
