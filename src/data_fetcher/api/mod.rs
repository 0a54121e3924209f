pub mod http_client;
pub mod urls;
mod core;
mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export the accessor
pub use core::{ApiClient, ContentSource};
