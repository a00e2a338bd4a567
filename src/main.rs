use anyhow::Context;
use app_core::domain::format_rupees;
use app_state::LoadState;
use goodseva::{init_logging, App, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_file(&path)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        None => AppConfig::default(),
    };
    init_logging(&config.logging)?;

    let app = App::open(config)?;
    let home = app.mount("home");
    let mut dashboard = home.fetch_all(app.logistics.clone());

    match dashboard.settled().await {
        LoadState::Ready(snapshot) => {
            tracing::info!(
                in_transit = snapshot.stats.in_transit,
                trucks = snapshot.stats.trucks,
                bids = snapshot.stats.bids,
                "dashboard"
            );
            for bid in &snapshot.bids {
                tracing::info!(trip = %bid.trip_id, amount = %format_rupees(bid.amount), status = %bid.status, "bid");
            }
        }
        other => tracing::warn!("dashboard not loaded: {:?}", other),
    }

    app.flush()
}
