//! snek-agent - a WebSocket-served snake agent driven by a trained policy
//!
//! This library provides:
//! - Board geometry and snapshot parsing (board module)
//! - The perception-to-action pipeline around the policy network (policy module)
//! - The per-session WebSocket serving loop (server module)
//!
//! Each inbound board snapshot yields exactly one outbound absolute
//! direction; nothing persists across requests except the loaded policy
//! weights, which are read-only after startup.

pub mod board;
pub mod policy;
pub mod server;
