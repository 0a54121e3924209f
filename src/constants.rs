//! Application-wide constants and configuration values

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Base URL of the local CMS instance used when nothing is configured
pub const DEFAULT_API_DOMAIN: &str = "http://localhost:64203";

/// Number of content items requested in a single delivery API call
pub const DEFAULT_CONTENT_TAKE: u32 = 100;

/// Path of the CMS content delivery endpoint
pub const CONTENT_DELIVERY_PATH: &str = "/umbraco/delivery/api/v1/content";

/// Number of matches returned by a player's recent match list
pub const RECENT_MATCHES_LIMIT: usize = 3;

/// Content type names as published by the CMS, compared case-insensitively
pub mod content_types {
    pub const TEAM: &str = "team";
    pub const PLAYER: &str = "player";
    pub const PLAYERS_FOLDER: &str = "playersfolder";
    pub const SEASON: &str = "season";
    pub const WEEK: &str = "week";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "LEAGUE_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "LEAGUE_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "LEAGUE_HTTP_TIMEOUT";

    /// Environment variable for the delivery API `take` parameter
    pub const CONTENT_TAKE: &str = "LEAGUE_CONTENT_TAKE";
}

/// Retry configuration
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Initial backoff before the first retry (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;

    /// Retry delay for rate limit errors (seconds)
    pub const RATE_LIMIT_DELAY_SECONDS: u64 = 60;

    /// Retry delay for server errors (seconds)
    pub const SERVER_ERROR_DELAY_SECONDS: u64 = 5;

    /// Retry delay for service unavailable errors (seconds)
    pub const SERVICE_UNAVAILABLE_DELAY_SECONDS: u64 = 30;

    /// Retry delay for network timeout errors (seconds)
    pub const NETWORK_TIMEOUT_DELAY_SECONDS: u64 = 2;

    /// Retry delay for network connection errors (seconds)
    pub const NETWORK_CONNECTION_DELAY_SECONDS: u64 = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_constants_are_reasonable() {
        let max_attempts = retry::MAX_ATTEMPTS;
        let base_delay = retry::BASE_DELAY_MS;
        assert!(max_attempts > 0);
        assert!(base_delay > 0);

        let rate_limit_delay = retry::RATE_LIMIT_DELAY_SECONDS;
        let server_error_delay = retry::SERVER_ERROR_DELAY_SECONDS;
        let service_unavailable_delay = retry::SERVICE_UNAVAILABLE_DELAY_SECONDS;
        let timeout_delay = retry::NETWORK_TIMEOUT_DELAY_SECONDS;
        let connection_delay = retry::NETWORK_CONNECTION_DELAY_SECONDS;

        // Rate limit delay should be the longest (most severe)
        assert!(rate_limit_delay >= service_unavailable_delay);
        assert!(rate_limit_delay >= connection_delay);
        assert!(rate_limit_delay >= server_error_delay);

        // Timeout delay should be the shortest (least severe)
        assert!(timeout_delay <= server_error_delay);
        assert!(timeout_delay <= connection_delay);
    }

    #[test]
    fn test_content_types_are_lowercase() {
        for name in [
            content_types::TEAM,
            content_types::PLAYER,
            content_types::PLAYERS_FOLDER,
            content_types::SEASON,
            content_types::WEEK,
        ] {
            assert_eq!(name, name.to_lowercase());
        }
    }

    #[test]
    fn test_defaults_are_usable() {
        let take = DEFAULT_CONTENT_TAKE;
        let timeout = DEFAULT_HTTP_TIMEOUT_SECONDS;
        assert!(take > 0);
        assert!(timeout > 0);
        assert!(DEFAULT_API_DOMAIN.starts_with("http"));
        assert!(CONTENT_DELIVERY_PATH.starts_with('/'));
    }

    #[test]
    fn test_env_var_names_are_not_empty() {
        assert!(!env_vars::API_DOMAIN.is_empty());
        assert!(!env_vars::LOG_FILE.is_empty());
        assert!(!env_vars::HTTP_TIMEOUT.is_empty());
        assert!(!env_vars::CONTENT_TAKE.is_empty());
    }
}
