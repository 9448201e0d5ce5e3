mod config;

use std::sync::Arc;

use config::Config;
use fxgrid_core::fx::{FxService, FxServiceTrait};
use fxgrid_market_data::CentralChartsProvider;
use fxgrid_storage_sqlite::{db, RateRepository};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let fmt_layer = fmt::layer();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();

    let pool = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let provider = Arc::new(CentralChartsProvider::new(config.source_url.clone()));
    let repository = Arc::new(RateRepository::new(pool));
    let service = FxService::new(provider, repository, config.reference_currency.clone());

    let report = service.sync_rates().await?;
    tracing::info!(
        "Run complete: {} derived rates over {} pairs ({} malformed, {} missing anchor)",
        report.counts.derived,
        report.counts.pairs_requested,
        report.counts.malformed,
        report.counts.missing_anchor
    );

    Ok(())
}
