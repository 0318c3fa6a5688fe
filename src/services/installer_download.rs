//! Fetch a remote installer script into a temporary file.

use std::io::Write;
use std::time::Duration;

use reqwest::blocking::Client;
use tempfile::NamedTempFile;
use tracing::debug;
use url::Url;

use crate::domain::AppError;

const DOWNLOAD_TIMEOUT_SECS: u64 = 60;

/// Download `url` and persist the body to a temp file that lives as long as the handle.
pub fn download_script(url: &Url) -> Result<NamedTempFile, AppError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .build()
        .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

    debug!(%url, "downloading installer");
    let response = client.get(url.clone()).send().map_err(|e| download_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(download_error(url, format!("HTTP {}", status)));
    }

    let body = response.bytes().map_err(|e| download_error(url, e))?;
    if body.is_empty() {
        return Err(download_error(url, "empty response body"));
    }

    let mut file = NamedTempFile::new()?;
    file.write_all(&body)?;
    file.flush()?;
    Ok(file)
}

fn download_error(url: &Url, details: impl ToString) -> AppError {
    AppError::Download { url: url.to_string(), details: details.to_string() }
}
