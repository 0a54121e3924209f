//! JSON fetching with retry logic and status-aware error handling

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// Maps a non-success HTTP status to the matching error variant.
pub(super) fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Parses a response body as JSON, telling empty bodies apart from bodies
/// that are not JSON at all.
pub(super) fn parse_json_body(body: &str, url: &str) -> Result<Value, AppError> {
    if body.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    serde_json::from_str::<Value>(body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        );
        AppError::api_malformed_json(e.to_string(), url)
    })
}

/// Fetches a URL and parses the body as JSON.
///
/// - Retries 429 and 5xx responses as well as timeouts and connection
///   failures up to `max_retries` times with exponential backoff
/// - Respects `Retry-After` headers given in seconds
/// - Maps the final non-success status to a specific [`AppError`]
#[instrument(skip(client))]
pub(super) async fn fetch_json(
    client: &Client,
    url: &str,
    max_retries: u32,
) -> Result<Value, AppError> {
    info!("Fetching data from URL: {url}");

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let response = loop {
        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if (status.as_u16() == 429 || status.is_server_error()) && attempt < max_retries {
                    let retry_after = resp
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(Duration::from_secs);
                    let wait = retry_after.unwrap_or(backoff);
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status,
                        url,
                        wait,
                        attempt + 1,
                        max_retries
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                break resp;
            }
            Err(e) => {
                if (e.is_timeout() || e.is_connect()) && attempt < max_retries {
                    warn!(
                        "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                        e,
                        url,
                        backoff,
                        attempt + 1,
                        max_retries
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                error!("Request failed for URL {}: {}", url, e);
                return if e.is_timeout() {
                    Err(AppError::network_timeout(url))
                } else if e.is_connect() {
                    Err(AppError::network_connection(url, e.to_string()))
                } else {
                    Err(AppError::ApiFetch(e))
                };
            }
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(status_error(status_code, reason, url));
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", body.len());
    parse_json_body(&body, url)
}
