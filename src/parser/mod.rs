pub mod uri;

// Re-export the parsing entry points
pub use uri::{endpoint_from_url, parse_endpoint, split_user_info};
