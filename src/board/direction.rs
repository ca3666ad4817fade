/// Absolute compass heading on the board
///
/// Wire encoding: 0=Left, 1=Right, 2=Up, 3=Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Decode a wire direction code, rejecting anything outside {0,1,2,3}
    pub fn from_code(code: i64) -> Option<Direction> {
        match code {
            0 => Some(Direction::Left),
            1 => Some(Direction::Right),
            2 => Some(Direction::Up),
            3 => Some(Direction::Down),
            _ => None,
        }
    }

    /// Wire direction code for this heading
    pub fn code(&self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Heading after a 90-degree counter-clockwise turn
    pub fn rotate_left(&self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Heading after a 90-degree clockwise turn
    pub fn rotate_right(&self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// The 180-degree reverse of this heading
    pub fn opposite(&self) -> Direction {
        self.rotate_right().rotate_right()
    }

    /// Returns the delta (dx, dy) for one step in this direction
    ///
    /// y grows downward: Down increases y, Up decreases y. The policy
    /// network was trained under this convention, so it must not change.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Action expressed relative to the agent's current heading
///
/// This is the policy network's output space. The discriminant order
/// (Straight < TurnRight < TurnLeft) matches the network's output slots
/// and the argmax tie-break, so it must stay in sync with the trained
/// weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeAction {
    Straight,
    TurnRight,
    TurnLeft,
}

impl RelativeAction {
    /// All actions in output-slot order
    pub const ALL: [RelativeAction; 3] = [
        RelativeAction::Straight,
        RelativeAction::TurnRight,
        RelativeAction::TurnLeft,
    ];

    /// Resolve this relative action against an absolute heading
    pub fn apply_to(&self, heading: Direction) -> Direction {
        match self {
            RelativeAction::Straight => heading,
            RelativeAction::TurnRight => heading.rotate_right(),
            RelativeAction::TurnLeft => heading.rotate_left(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    #[test]
    fn test_rotations_are_mutual_inverses() {
        for d in ALL_DIRECTIONS {
            assert_eq!(d.rotate_left().rotate_right(), d);
            assert_eq!(d.rotate_right().rotate_left(), d);
        }
    }

    #[test]
    fn test_rotation_forms_four_cycle() {
        for d in ALL_DIRECTIONS {
            let once = d.rotate_right();
            assert_ne!(once, d);
            assert_eq!(once.rotate_right(), d.opposite());
            assert_eq!(d.rotate_right().rotate_right().rotate_right().rotate_right(), d);
        }
    }

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_delta_uses_y_down_convention() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_wire_code_round_trip() {
        for d in ALL_DIRECTIONS {
            assert_eq!(Direction::from_code(d.code() as i64), Some(d));
        }
        assert_eq!(Direction::from_code(-1), None);
        assert_eq!(Direction::from_code(4), None);
        assert_eq!(Direction::from_code(42), None);
    }

    #[test]
    fn test_relative_action_resolution() {
        assert_eq!(
            RelativeAction::Straight.apply_to(Direction::Right),
            Direction::Right
        );
        assert_eq!(
            RelativeAction::TurnRight.apply_to(Direction::Right),
            Direction::Down
        );
        assert_eq!(
            RelativeAction::TurnLeft.apply_to(Direction::Right),
            Direction::Up
        );
    }
}
