//! Runs the employee fetch off the UI loop and reports back over a channel.

use std::time::Instant;

use tokio::sync::mpsc;

use crate::core::employee::Employee;
use crate::core::fetch::{self, FetchError};

pub type FetchResult = Result<Vec<Employee>, FetchError>;

/// Spawn the one-shot fetch.  Exactly one message is sent, success or not,
/// so the loading state always resolves.
pub fn spawn_employee_fetch(
    tx: mpsc::UnboundedSender<FetchResult>,
    client: reqwest::Client,
    url: String,
) {
    tokio::spawn(async move {
        let t0 = Instant::now();
        let result = fetch::fetch_employees(&client, &url).await;
        match &result {
            Ok(list) => tracing::info!(
                "fetched {} employees from {url} in {:.2?}",
                list.len(),
                t0.elapsed()
            ),
            Err(FetchError::Status(code)) => {
                tracing::warn!("fetch from {url} answered {code} after {:.2?}", t0.elapsed())
            }
            Err(err) => tracing::warn!("fetch from {url} failed after {:.2?}: {err}", t0.elapsed()),
        }
        let _ = tx.send(result);
    });
}
