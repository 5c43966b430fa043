pub mod uri;

// Re-export URI generation functions
pub use uri::{compose, to_uri, to_url};
