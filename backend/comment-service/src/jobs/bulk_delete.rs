//! Bulk comment deletion over an identifier range
//!
//! Unconditionally issues a DELETE for every identifier in the configured
//! inclusive range. A 204 counts as a success; any other status or a
//! transport error is logged and counted as a failure. Deleting an id
//! that does not exist is an ordinary failure, not a fatal one.

use std::ops::RangeInclusive;

use reqwest::{Client, StatusCode};
use tracing::{error, info};

use crate::jobs::collection_url;

/// Per-identifier outcome counts for one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BulkDeleteReport {
    pub deleted: u32,
    pub failed: u32,
}

pub async fn run(
    client: &Client,
    base_url: &str,
    ids: RangeInclusive<i64>,
) -> anyhow::Result<BulkDeleteReport> {
    let url = collection_url(base_url);
    let mut report = BulkDeleteReport::default();

    for id in ids {
        let delete_url = format!("{}{}/", url, id);
        match client.delete(&delete_url).send().await {
            Ok(response) if response.status() == StatusCode::NO_CONTENT => {
                info!(id, "comment deleted");
                report.deleted += 1;
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                error!(id, %status, body = %body, "comment delete failed");
                report.failed += 1;
            }
            Err(e) => {
                error!(id, error = %e, "comment delete request failed");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
