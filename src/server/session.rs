use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tracing::{info, warn};

use super::protocol::{self, ProtocolError};
use crate::policy::{DecisionError, Policy, decide};

/// Everything that can make one snapshot fail without ending the session
#[derive(Debug, Error)]
enum SnapshotError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Decision(#[from] DecisionError),
}

/// Serve one client session over an accepted TCP stream
///
/// Runs the sequential receive-decide-send loop: each inbound snapshot
/// yields exactly one outbound frame. A rejected snapshot is answered
/// with an error object and the loop continues; channel closure ends the
/// loop silently.
pub async fn run_session(stream: TcpStream, policy: Arc<Policy>) -> Result<()> {
    let peer = stream.peer_addr().ok();
    let mut ws = accept_async(stream)
        .await
        .context("WebSocket handshake failed")?;
    info!(?peer, "session opened");

    ws.send(Message::text("connected"))
        .await
        .context("Failed to send greeting")?;

    while let Some(message) = ws.next().await {
        let message = match message {
            Ok(message) => message,
            Err(err) => {
                // Transport-level failure mid-receive; treat like a close.
                warn!(?peer, %err, "channel error, ending session");
                break;
            }
        };

        match message {
            Message::Text(text) => {
                let reply = match handle_snapshot(&policy, text.as_str()) {
                    Ok(reply) => reply,
                    Err(err) => {
                        warn!(?peer, %err, "rejecting snapshot");
                        protocol::error_reply(&err.to_string())
                    }
                };
                ws.send(Message::text(reply))
                    .await
                    .context("Failed to send reply")?;
            }
            Message::Close(_) => break,
            // tungstenite queues the pong automatically
            Message::Ping(_) | Message::Pong(_) => {}
            other => {
                warn!(?peer, ?other, "ignoring non-text frame");
            }
        }
    }

    info!(?peer, "session closed");
    Ok(())
}

fn handle_snapshot(policy: &Policy, text: &str) -> Result<String, SnapshotError> {
    let (grid, heading) = protocol::parse_snapshot(text)?;
    let decided = decide(policy, &grid, heading)?;
    Ok(protocol::direction_reply(decided))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyNetworkConfig;

    fn test_policy() -> Policy {
        Policy::from_config(&PolicyNetworkConfig::new(8))
    }

    #[test]
    fn test_handle_snapshot_produces_direction_code() {
        let policy = test_policy();
        let text = r#"{
            "direction": 1,
            "grid": [
                ["free", "free", "free", "free", "free"],
                ["free", "free", "free", "free", "free"],
                ["free", "free", "head", "free", "free"],
                ["free", "free", "free", "food", "free"],
                ["free", "free", "free", "free", "free"]
            ]
        }"#;

        let reply = handle_snapshot(&policy, text).unwrap();
        let code: i64 = reply.parse().unwrap();
        assert!((0..=3).contains(&code));
    }

    #[test]
    fn test_identical_snapshots_get_identical_replies() {
        let policy = test_policy();
        let text = r#"{
            "direction": 2,
            "grid": [
                ["free", "food", "free"],
                ["free", "head", "free"],
                ["free", "tail", "free"]
            ]
        }"#;

        assert_eq!(
            handle_snapshot(&policy, text).unwrap(),
            handle_snapshot(&policy, text).unwrap()
        );
    }

    #[test]
    fn test_headless_snapshot_is_rejected() {
        let policy = test_policy();
        let text = r#"{ "direction": 0, "grid": [["free", "food"]] }"#;

        let err = handle_snapshot(&policy, text).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Decision(DecisionError::MissingHead)
        ));
    }

    #[test]
    fn test_malformed_snapshot_is_rejected() {
        let policy = test_policy();

        let err = handle_snapshot(&policy, "{}").unwrap_err();
        assert!(matches!(err, SnapshotError::Protocol(_)));

        let err = handle_snapshot(&policy, r#"{ "direction": 9, "grid": [["head"]] }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Protocol(ProtocolError::InvalidDirection(9))
        ));
    }
}
