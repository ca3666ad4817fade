//! Weight artifact persistence
//!
//! The policy is produced by an external training pipeline and shipped as
//! two files, following Burn's Record system:
//! - `<path>` — network weights (named MessagePack record)
//! - `<path>.meta.json` — architecture metadata as JSON
//!
//! Loading happens once at process start and is fatal on failure; the
//! server never starts serving sessions without a usable policy.

use anyhow::{Context, Result};
use burn::{
    module::Module,
    record::{FullPrecisionSettings, NamedMpkFileRecorder, Recorder, RecorderError},
    tensor::backend::Backend,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::features::FEATURE_COUNT;
use super::network::{PolicyNetwork, PolicyNetworkConfig};
use crate::board::RelativeAction;

/// Why a weight artifact could not be turned into a ready policy
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read metadata from {path:?}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed metadata")]
    MetadataFormat(#[from] serde_json::Error),

    #[error(
        "incompatible architecture: expected {expected_inputs} inputs and \
         {expected_actions} actions, artifact has {input_dim} and {num_actions}"
    )]
    Incompatible {
        input_dim: usize,
        num_actions: usize,
        expected_inputs: usize,
        expected_actions: usize,
    },

    #[error("failed to load network weights from {path:?}")]
    Weights {
        path: PathBuf,
        source: RecorderError,
    },
}

/// Metadata saved with the weight artifact
///
/// Carries the architecture needed to rebuild the network before the
/// record is applied, plus a version identifier for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Number of input features the network was trained on
    pub input_dim: usize,
    /// Hidden layer width
    pub hidden_dim: usize,
    /// Number of scored relative actions
    pub num_actions: usize,
    /// Version identifier of the writer
    pub version: String,
}

impl PolicyMetadata {
    pub fn new(config: &PolicyNetworkConfig) -> Self {
        Self {
            input_dim: config.input_dim,
            hidden_dim: config.hidden_dim,
            num_actions: config.num_actions,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Save a policy network and its metadata to a file
///
/// Creates parent directories if they don't exist. Used by the training
/// pipeline side and by tests; the server only loads.
pub fn save_policy<B: Backend>(
    network: &PolicyNetwork<B>,
    config: &PolicyNetworkConfig,
    path: &Path,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
    recorder
        .record(network.clone().into_record(), path.to_path_buf())
        .context("Failed to save network weights")?;

    let metadata = PolicyMetadata::new(config);
    let meta_path = path.with_extension("meta.json");
    let meta_json =
        serde_json::to_string_pretty(&metadata).context("Failed to serialize metadata")?;
    std::fs::write(&meta_path, meta_json)
        .with_context(|| format!("Failed to write metadata to {:?}", meta_path))?;

    Ok(())
}

/// Load a policy network from a weight artifact
///
/// Reads the metadata sidecar first, validates that the artifact matches
/// the fixed 11-feature / 3-action interface, rebuilds the architecture,
/// then applies the weight record.
pub fn load_policy<B: Backend>(
    path: &Path,
    device: &B::Device,
) -> Result<(PolicyNetwork<B>, PolicyMetadata), LoadError> {
    let meta_path = path.with_extension("meta.json");
    let meta_json = std::fs::read_to_string(&meta_path).map_err(|source| LoadError::Metadata {
        path: meta_path.clone(),
        source,
    })?;
    let metadata: PolicyMetadata = serde_json::from_str(&meta_json)?;

    let expected_actions = RelativeAction::ALL.len();
    if metadata.input_dim != FEATURE_COUNT || metadata.num_actions != expected_actions {
        return Err(LoadError::Incompatible {
            input_dim: metadata.input_dim,
            num_actions: metadata.num_actions,
            expected_inputs: FEATURE_COUNT,
            expected_actions,
        });
    }

    let config = PolicyNetworkConfig::new(metadata.hidden_dim);
    let network = config.init::<B>(device);

    let recorder = NamedMpkFileRecorder::<FullPrecisionSettings>::new();
    let record = recorder
        .load(path.to_path_buf(), device)
        .map_err(|source| LoadError::Weights {
            path: path.to_path_buf(),
            source,
        })?;

    Ok((network.load_record(record), metadata))
}
