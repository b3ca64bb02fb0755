//! Bulk comment text rewrite
//!
//! Fetches the full comment collection from the API, recomputes every
//! text with the canonical casing transform, and writes each record back
//! with a full-replacement PUT. A failed initial fetch aborts the whole
//! run; per-record failures are logged and counted, never fatal. Rerunning
//! the job is a no-op because the transform is idempotent.

use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::jobs::collection_url;
use crate::validators::capitalize;

/// Comment record as returned by the list endpoint; fields the transform
/// needs are deserialized leniently so a malformed record is skipped, not
/// a run-aborting error.
#[derive(Debug, Deserialize)]
struct ApiComment {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    user: Option<Uuid>,
    #[serde(default)]
    text: String,
}

/// Per-record outcome counts for one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BulkUpdateReport {
    pub updated: u32,
    pub failed: u32,
    pub skipped: u32,
}

pub async fn run(client: &Client, base_url: &str) -> anyhow::Result<BulkUpdateReport> {
    let url = collection_url(base_url);

    let comments: Vec<ApiComment> = client
        .get(&url)
        .send()
        .await
        .context("fetching comment collection")?
        .error_for_status()
        .context("comment collection fetch returned an error status")?
        .json()
        .await
        .context("decoding comment collection")?;

    info!(total = comments.len(), "fetched comment collection");

    let mut report = BulkUpdateReport::default();

    for comment in comments {
        let text = capitalize(&comment.text);

        let (id, user) = match (comment.id, comment.user) {
            (Some(id), Some(user)) if !text.is_empty() => (id, user),
            _ => {
                warn!(id = ?comment.id, "comment is missing id, text, or user; skipping");
                report.skipped += 1;
                continue;
            }
        };

        let put_url = format!("{}{}/", url, id);
        match client
            .put(&put_url)
            .json(&json!({ "text": text, "user": user }))
            .send()
            .await
        {
            Ok(response) if response.status() == StatusCode::OK => {
                info!(id, "comment updated");
                report.updated += 1;
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                error!(id, %status, body = %body, "comment update failed");
                report.failed += 1;
            }
            Err(e) => {
                error!(id, error = %e, "comment update request failed");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
