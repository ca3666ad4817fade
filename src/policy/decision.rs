use thiserror::Error;
use tracing::debug;

use super::features;
use super::inference::Policy;
use crate::board::{Direction, Grid, RelativeAction};

/// One score per relative action, in output-slot order
/// (Straight, TurnRight, TurnLeft)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTriple(pub [f32; 3]);

impl ScoreTriple {
    /// The best-scoring relative action
    ///
    /// Ties break toward the lowest slot index (Straight < TurnRight <
    /// TurnLeft), the conventional first-maximum argmax; this keeps the
    /// decision deterministic.
    pub fn best_action(&self) -> RelativeAction {
        let mut best = 0;
        for (idx, &score) in self.0.iter().enumerate().skip(1) {
            if score > self.0[best] {
                best = idx;
            }
        }
        RelativeAction::ALL[best]
    }
}

/// Why a snapshot could not be turned into a decision
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    #[error("snapshot contains no head cell")]
    MissingHead,
}

/// Run the full perception-to-action pipeline on one snapshot
///
/// Parses head and food out of the grid, encodes the feature vector in
/// the agent's frame, scores it with the policy, and resolves the winning
/// relative action back to an absolute heading.
pub fn decide(policy: &Policy, grid: &Grid, heading: Direction) -> Result<Direction, DecisionError> {
    let head = grid.head().ok_or(DecisionError::MissingHead)?;
    let food = grid.food();

    let features = features::encode(grid, heading, head, food);
    let scores = policy.infer(&features);
    let action = scores.best_action();
    let decided = action.apply_to(heading);

    debug!(?heading, ?action, ?decided, scores = ?scores.0, "decision");
    Ok(decided)
}
