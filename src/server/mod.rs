//! HTTP surface for the dashboard actions
//!
//! The server exposes one form-post route per action and translates tagged
//! outcomes into responses: `Success` transfers control with a redirect,
//! failures return the `{ errors?, message? }` state for the form to
//! re-render.

pub mod handlers;
pub mod router;

pub use router::build_dashboard_routes;

use crate::actions::AppState;
use crate::config::DashboardConfig;
use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a global tracing subscriber honoring `RUST_LOG`, defaulting to
/// `info`. Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Bind `config.bind_addr` and serve the dashboard routes until stopped
pub async fn serve(config: &DashboardConfig, state: AppState) -> Result<()> {
    let app = build_dashboard_routes(state);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "dashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
