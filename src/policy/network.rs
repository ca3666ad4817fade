//! Policy network for the snake agent
//!
//! A small fully connected network mapping the 11-slot feature vector to
//! one score per relative action:
//!
//! ```text
//! Input: [batch, 11]
//!   ↓ Linear(11 → hidden) + ReLU
//!   ↓ Linear(hidden → 3)
//! Output: [batch, 3]  (Straight, TurnRight, TurnLeft)
//! ```
//!
//! The input and output widths are fixed by the feature encoding and the
//! relative action space; only the hidden width is a free hyperparameter.

use burn::{
    module::Module,
    nn::{Linear, LinearConfig},
    tensor::{Tensor, activation::relu, backend::Backend},
};

use super::features::FEATURE_COUNT;
use crate::board::RelativeAction;

/// Configuration for the policy network
#[derive(Debug, Clone)]
pub struct PolicyNetworkConfig {
    /// Number of input features (11 for the snake feature vector)
    pub input_dim: usize,
    /// Hidden layer width
    pub hidden_dim: usize,
    /// Number of relative actions scored (3)
    pub num_actions: usize,
}

impl PolicyNetworkConfig {
    /// Create a configuration with a custom hidden width
    pub fn new(hidden_dim: usize) -> Self {
        Self {
            input_dim: FEATURE_COUNT,
            hidden_dim,
            num_actions: RelativeAction::ALL.len(),
        }
    }

    /// Initialize the policy network from this configuration
    pub fn init<B: Backend>(&self, device: &B::Device) -> PolicyNetwork<B> {
        PolicyNetwork {
            fc1: LinearConfig::new(self.input_dim, self.hidden_dim).init(device),
            fc2: LinearConfig::new(self.hidden_dim, self.num_actions).init(device),
        }
    }
}

impl Default for PolicyNetworkConfig {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Fully connected policy network
///
/// Generic over the Burn backend; serving uses the plain NdArray backend
/// since no gradients are needed.
#[derive(Module, Debug)]
pub struct PolicyNetwork<B: Backend> {
    fc1: Linear<B>,
    fc2: Linear<B>,
}

impl<B: Backend> PolicyNetwork<B> {
    /// Forward pass: `[batch, 11]` features to `[batch, 3]` action scores
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.fc1.forward(features);
        let x = relu(x);
        self.fc2.forward(x)
    }
}
