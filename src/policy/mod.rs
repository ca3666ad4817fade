//! Perception-to-action pipeline around the trained policy network
//!
//! Provides:
//! - Fixed 11-slot relative feature encoding
//! - Burn policy network (11 → hidden → 3) on the NdArray backend
//! - Weight artifact persistence with metadata validation
//! - Inference adapter shared read-only across sessions
//! - Score decoding back to an absolute heading

pub mod backend;
pub mod decision;
pub mod features;
pub mod inference;
pub mod network;
pub mod persistence;

pub use backend::{InferenceBackend, default_device};
pub use decision::{DecisionError, ScoreTriple, decide};
pub use features::{FEATURE_COUNT, FeatureVector, encode};
pub use inference::Policy;
pub use network::{PolicyNetwork, PolicyNetworkConfig};
pub use persistence::{LoadError, PolicyMetadata, load_policy, save_policy};
