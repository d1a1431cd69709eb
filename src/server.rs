//! HTTP surface for the job status simulator.
//!
//! The oracle is constructed by the caller and handed to the router
//! explicitly; there is no process-wide server state.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{Extension, Json, Router, routing::get};

use crate::api::StatusResponse;
use crate::oracle::JobOracle;

/// Build the status router over an explicitly owned oracle.
pub fn build_router(oracle: Arc<JobOracle>) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .layer(Extension(oracle))
}

async fn get_status(Extension(oracle): Extension<Arc<JobOracle>>) -> Json<StatusResponse> {
    let status = oracle.status();
    tracing::debug!(result = %status.result, "status served");
    Json(status)
}

/// Serve the status endpoint until the process is stopped.
pub async fn serve(addr: SocketAddr, oracle: Arc<JobOracle>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("status server listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(oracle)).await?;
    Ok(())
}
