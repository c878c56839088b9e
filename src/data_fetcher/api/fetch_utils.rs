//! Single-shot JSON fetching with status and parse error mapping

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` once and deserializes the body into `T`.
///
/// Anything but `200 OK` fails with [`AppError::ApiFetch`] naming `resource`.
/// No retries: the caller aborts on the first failure.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
/// * `resource` - Human name of what is being fetched, used in errors
#[instrument(skip(client))]
pub(super) async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    resource: &str,
) -> Result<T, AppError> {
    info!("Fetching {resource} from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::Network(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if status != StatusCode::OK {
        error!(
            "HTTP {} - {} (URL: {})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
            url
        );
        return Err(AppError::api_fetch(resource, status.as_u16()));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::Network(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse {resource} response: {} (URL: {})", e, url);
        debug!(
            "Response text (first 200 chars): {}",
            response_text.chars().take(200).collect::<String>()
        );
        AppError::api_parse(e.to_string(), url)
    })
}
