use crate::board::{Direction, Grid, Position};

/// Number of input slots the policy network expects
pub const FEATURE_COUNT: usize = 11;

/// The fixed 11-slot input vector of the policy network
///
/// Slot order is an invariant of the trained weights:
/// danger_straight, danger_right, danger_left, moving_left, moving_right,
/// moving_up, moving_down, food_left, food_right, food_up, food_down.
/// Reordering it without retraining silently breaks the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureVector {
    pub danger_straight: bool,
    pub danger_right: bool,
    pub danger_left: bool,
    pub moving_left: bool,
    pub moving_right: bool,
    pub moving_up: bool,
    pub moving_down: bool,
    pub food_left: bool,
    pub food_right: bool,
    pub food_up: bool,
    pub food_down: bool,
}

impl FeatureVector {
    /// The slots as network input, in the documented order
    pub fn to_input(&self) -> [f32; FEATURE_COUNT] {
        [
            self.danger_straight,
            self.danger_right,
            self.danger_left,
            self.moving_left,
            self.moving_right,
            self.moving_up,
            self.moving_down,
            self.food_left,
            self.food_right,
            self.food_up,
            self.food_down,
        ]
        .map(|flag| if flag { 1.0 } else { 0.0 })
    }
}

/// Encode a snapshot into the agent's frame of reference
///
/// Danger flags look one step ahead of the head along the current heading
/// and its two 90-degree rotations; a candidate cell is dangerous iff it is
/// Wall, Body or Tail (out-of-bounds lookups already resolve to Wall).
/// Exactly one moving_* flag is set, matching the heading. Food flags are
/// independent per-axis comparisons against the head, so diagonal food sets
/// one x-flag and one y-flag; absent food leaves all four false.
pub fn encode(
    grid: &Grid,
    heading: Direction,
    head: Position,
    food: Option<Position>,
) -> FeatureVector {
    let straight = head.stepped(heading);
    let right = head.stepped(heading.rotate_right());
    let left = head.stepped(heading.rotate_left());

    let mut features = FeatureVector {
        danger_straight: grid.cell_at_pos(straight).is_hazard(),
        danger_right: grid.cell_at_pos(right).is_hazard(),
        danger_left: grid.cell_at_pos(left).is_hazard(),
        ..Default::default()
    };

    match heading {
        Direction::Left => features.moving_left = true,
        Direction::Right => features.moving_right = true,
        Direction::Up => features.moving_up = true,
        Direction::Down => features.moving_down = true,
    }

    if let Some(food) = food {
        features.food_left = food.x < head.x;
        features.food_right = food.x > head.x;
        features.food_up = food.y < head.y;
        features.food_down = food.y > head.y;
    }

    features
}
