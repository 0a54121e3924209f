//! URL building utilities for API endpoints

use crate::constants::CONTENT_DELIVERY_PATH;

/// Joins the API base URL and an endpoint path.
///
/// A trailing `/` on the base and a missing leading `/` on the endpoint are
/// both tolerated.
///
/// # Example
/// ```
/// use league_store::data_fetcher::api::build_content_url;
///
/// let url = build_content_url("http://localhost:64203/", "umbraco/delivery/api/v1/content");
/// assert_eq!(url, "http://localhost:64203/umbraco/delivery/api/v1/content");
/// ```
pub fn build_content_url(api_domain: &str, endpoint: &str) -> String {
    let base = api_domain.trim_end_matches('/');
    if endpoint.is_empty() {
        base.to_string()
    } else if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

/// Builds the content delivery endpoint requesting `take` items.
///
/// # Example
/// ```
/// use league_store::data_fetcher::api::build_content_endpoint;
///
/// assert_eq!(
///     build_content_endpoint(100),
///     "/umbraco/delivery/api/v1/content?take=100"
/// );
/// ```
pub fn build_content_endpoint(take: u32) -> String {
    format!("{CONTENT_DELIVERY_PATH}?take={take}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_content_url_joins_slashes() {
        assert_eq!(
            build_content_url("http://localhost:64203", "/api"),
            "http://localhost:64203/api"
        );
        assert_eq!(
            build_content_url("http://localhost:64203/", "/api"),
            "http://localhost:64203/api"
        );
        assert_eq!(
            build_content_url("http://localhost:64203", "api?take=1"),
            "http://localhost:64203/api?take=1"
        );
        assert_eq!(
            build_content_url("http://localhost:64203/", ""),
            "http://localhost:64203"
        );
    }

    #[test]
    fn test_build_content_endpoint() {
        assert_eq!(
            build_content_endpoint(25),
            "/umbraco/delivery/api/v1/content?take=25"
        );
    }
}
