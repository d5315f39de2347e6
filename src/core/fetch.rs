//! The single network request: GET the members list and decode it.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use super::employee::{self, Employee};

/// Public endpoint serving the members list.
pub const EMPLOYEE_API: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Text shown in the blocking alert for any failure.
pub const FETCH_FAILED: &str = "Failed to fetch data";

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout, or body read failure.
    #[error("Failed to fetch data: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("Failed to fetch data")]
    Status(StatusCode),
    /// The body was not a JSON array of employees.
    #[error("Failed to fetch data: invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Build the HTTP client used for the fetch.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Fetch and decode the employee list from `url`.  No retries.
pub async fn fetch_employees(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Employee>, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.bytes().await?;
    Ok(employee::decode_list(&body)?)
}
