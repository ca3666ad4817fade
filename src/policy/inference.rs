use burn::{
    backend::ndarray::NdArrayDevice,
    module::Module,
    tensor::{Tensor, TensorData},
};
use std::path::Path;
use tracing::info;

use super::backend::{InferenceBackend, default_device};
use super::decision::ScoreTriple;
use super::features::{FEATURE_COUNT, FeatureVector};
use super::network::{PolicyNetwork, PolicyNetworkConfig};
use super::persistence::{self, LoadError, PolicyMetadata};

/// The loaded, ready-to-serve policy
///
/// Holds the trained network and its device. Read-only after load: every
/// call runs one inference-only forward pass with no state mutation, so a
/// single `Arc<Policy>` is shared across concurrent sessions without
/// locking.
pub struct Policy {
    network: PolicyNetwork<InferenceBackend>,
    device: NdArrayDevice,
    metadata: PolicyMetadata,
}

// SAFETY: Burn's `Param` holds a `core::cell::OnceCell`, which keeps the
// auto `Sync` impl off even once every parameter is initialized. Both
// constructors (`load` via `load_record`, `from_config` via `fork`) force
// eager initialization of every parameter, so after construction the cells
// are populated and `infer` only performs reads through them.
unsafe impl Sync for Policy {}

impl Policy {
    /// Load the policy from a weight artifact
    ///
    /// Called once at process start; any failure here is fatal — the
    /// server must not accept sessions without a usable policy.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let device = default_device();
        let (network, metadata) = persistence::load_policy::<InferenceBackend>(path, &device)?;
        info!(
            path = %path.display(),
            hidden_dim = metadata.hidden_dim,
            version = %metadata.version,
            "loaded policy network"
        );
        Ok(Self {
            network,
            device,
            metadata,
        })
    }

    /// Build a policy with freshly initialized weights
    ///
    /// Useful for tests and for bootstrapping an artifact before any
    /// training has produced one.
    pub fn from_config(config: &PolicyNetworkConfig) -> Self {
        let device = default_device();
        Self {
            // `fork` onto the same device forces eager parameter
            // initialization, which the `Sync` impl above relies on.
            network: config.init::<InferenceBackend>(&device).fork(&device),
            metadata: PolicyMetadata::new(config),
            device,
        }
    }

    /// Score one feature vector: 11 inputs in, 3 action scores out
    ///
    /// Deterministic for identical input and identical loaded weights.
    pub fn infer(&self, features: &FeatureVector) -> ScoreTriple {
        let input = features.to_input();
        let tensor = Tensor::<InferenceBackend, 2>::from_data(
            TensorData::new(input.to_vec(), [1, FEATURE_COUNT]),
            &self.device,
        );

        let scores = self.network.forward(tensor).into_data();
        let scores: Vec<f32> = scores.to_vec().expect("policy scores are f32");
        ScoreTriple([scores[0], scores[1], scores[2]])
    }

    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }
}
