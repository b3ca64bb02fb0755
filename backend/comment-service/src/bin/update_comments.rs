//! Admin job: rewrite every comment's text with the canonical casing
//! transform via the service's own HTTP API.

use comment_service::jobs::bulk_update;
use comment_service::Config;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = Config::from_env().map_err(anyhow::Error::msg)?;
    let client = reqwest::Client::new();

    let report = bulk_update::run(&client, &cfg.api.base_url).await?;

    info!(
        updated = report.updated,
        failed = report.failed,
        skipped = report.skipped,
        "bulk comment update finished"
    );
    Ok(())
}
