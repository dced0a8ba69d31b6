// sitezip: fetch a web page, harvest its subresources, and stream the
// lot back as a single ZIP archive.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sitezip::utils::constants::DEFAULT_PORT;
use sitezip::{HarvestConfig, Harvester};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sitezip=info,tower_http=info")),
        )
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let harvester = Arc::new(Harvester::new(HarvestConfig::default())?);
    let app = sitezip::server::router(harvester);

    let addr = format!("0.0.0.0:{port}");
    info!("sitezip listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
