//! Admin job: delete every comment in the configured identifier range via
//! the service's own HTTP API.

use comment_service::jobs::bulk_delete;
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

    let report = bulk_delete::run(
        &client,
        &cfg.api.base_url,
        cfg.purge.first_id..=cfg.purge.last_id,
    )
    .await?;

    info!(
        deleted = report.deleted,
        failed = report.failed,
        "bulk comment delete finished"
    );
    Ok(())
}
