//! WebSocket serving layer
//!
//! Accepts connections and runs one independent session loop per client.
//! Sessions share the loaded policy read-only through an `Arc`; there is
//! no cross-session state and no batching.

pub mod protocol;
pub mod session;

pub use protocol::{ProtocolError, SnapshotPayload, parse_snapshot};
pub use session::run_session;

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::policy::Policy;

/// Accept sessions until ctrl-c
pub async fn serve(listen: &str, policy: Arc<Policy>) -> Result<()> {
    let listener = TcpListener::bind(listen)
        .await
        .with_context(|| format!("Failed to bind {listen}"))?;
    info!(%listen, "listening for sessions");

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = accepted.context("Failed to accept connection")?;
                let policy = Arc::clone(&policy);
                tokio::spawn(async move {
                    if let Err(err) = session::run_session(stream, policy).await {
                        warn!(%peer, %err, "session ended with error");
                    }
                });
            }

            _ = tokio::signal::ctrl_c() => {
                info!("shutdown requested");
                break;
            }
        }
    }

    Ok(())
}
