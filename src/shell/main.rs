use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use cost_items::modules::cost_items::use_cases::setup_worksheet::handler::SetupWorksheetHandler;
use cost_items::shared::infrastructure::worksheet::in_memory::InMemoryWorksheet;
use cost_items::shell::config::ShellConfig;
use cost_items::shell::http;
use cost_items::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ShellConfig::from_env();

    // In-memory worksheet for now; a host-backed adapter plugs in here.
    let store = Arc::new(InMemoryWorksheet::new());
    SetupWorksheetHandler::new(store.clone()).handle().await?;

    let state = AppState::with_store(store);
    let app = http::router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("cost items API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
