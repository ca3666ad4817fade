use serde::Deserialize;
use thiserror::Error;

use crate::board::{CellKind, Direction, Grid, GridShapeError};

/// One inbound board snapshot, as sent by the client
///
/// `direction` is the agent's current heading as a wire code (0=Left,
/// 1=Right, 2=Up, 3=Down); `grid` is the board row-major with lowercase
/// cell tags.
#[derive(Debug, Deserialize)]
pub struct SnapshotPayload {
    pub direction: i64,
    pub grid: Vec<Vec<CellKind>>,
}

/// Why an inbound frame was rejected before reaching the pipeline
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed snapshot payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid direction code {0}, expected 0..=3")]
    InvalidDirection(i64),

    #[error(transparent)]
    Grid(#[from] GridShapeError),
}

/// Validate one text frame into a bounded grid and a heading
///
/// Everything the schema can reject is rejected here — unknown cell tags,
/// out-of-range direction codes, empty or ragged grids — so the core
/// pipeline only ever sees well-formed snapshots.
pub fn parse_snapshot(text: &str) -> Result<(Grid, Direction), ProtocolError> {
    let payload: SnapshotPayload = serde_json::from_str(text)?;

    let heading = Direction::from_code(payload.direction)
        .ok_or(ProtocolError::InvalidDirection(payload.direction))?;
    let grid = Grid::from_rows(payload.grid)?;

    Ok((grid, heading))
}

/// Encode a decided heading as the outbound frame (its integer code)
pub fn direction_reply(direction: Direction) -> String {
    direction.code().to_string()
}

/// Encode a rejection as an outbound error object
pub fn error_reply(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
