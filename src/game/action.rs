/// Unit step a snake moves per tick
///
/// `(0, 0)` means the snake has not started moving yet. Fields are private
/// so only the constants and `from_delta` can build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction {
    dx: i32,
    dy: i32,
}

impl Direction {
    pub const NONE: Direction = Direction { dx: 0, dy: 0 };
    pub const UP: Direction = Direction { dx: 0, dy: -1 };
    pub const DOWN: Direction = Direction { dx: 0, dy: 1 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };

    /// Build a direction from a raw delta, `None` unless it is a unit step or zero
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, 0) | (1, 0) | (-1, 0) | (0, 1) | (0, -1) => Some(Self { dx, dy }),
            _ => None,
        }
    }

    /// Returns the delta (dx, dy)
    pub fn delta(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    pub fn is_moving(&self) -> bool {
        *self != Self::NONE
    }

    /// Returns true if `other` exactly reverses this (moving) direction
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.is_moving() && other.dx == -self.dx && other.dy == -self.dy
    }
}

/// One of the two seats at the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Index into per-player storage
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Number of players in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerCount {
    #[default]
    One,
    Two,
}

impl PlayerCount {
    pub fn get(&self) -> usize {
        match self {
            PlayerCount::One => 1,
            PlayerCount::Two => 2,
        }
    }

    /// Players taking part, in the order they are resolved each tick
    pub fn players(&self) -> &'static [Player] {
        match self {
            PlayerCount::One => &[Player::One],
            PlayerCount::Two => &[Player::One, Player::Two],
        }
    }

    pub fn includes(&self, player: Player) -> bool {
        player.index() < self.get()
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PlayerCount::One),
            2 => Ok(PlayerCount::Two),
            other => Err(format!("player count must be 1 or 2, got {}", other)),
        }
    }
}

/// Every input the game accepts from the outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Steer a player on the next tick
    Turn(Player, Direction),
    /// Begin a fresh session
    Start(PlayerCount),
    /// Play again with the same player count after a game over
    Restart,
    /// Leave the session and go back to the title screen
    ReturnToTitle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::UP.is_opposite(Direction::DOWN));
        assert!(Direction::DOWN.is_opposite(Direction::UP));
        assert!(Direction::LEFT.is_opposite(Direction::RIGHT));
        assert!(Direction::RIGHT.is_opposite(Direction::LEFT));

        assert!(!Direction::UP.is_opposite(Direction::LEFT));
        assert!(!Direction::UP.is_opposite(Direction::UP));
    }

    #[test]
    fn test_stationary_has_no_opposite() {
        for dir in [
            Direction::UP,
            Direction::DOWN,
            Direction::LEFT,
            Direction::RIGHT,
            Direction::NONE,
        ] {
            assert!(!Direction::NONE.is_opposite(dir));
        }
    }

    #[test]
    fn test_from_delta() {
        assert_eq!(Direction::from_delta(1, 0), Some(Direction::RIGHT));
        assert_eq!(Direction::from_delta(0, -1), Some(Direction::UP));
        assert_eq!(Direction::from_delta(0, 0), Some(Direction::NONE));
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn test_every_direction_is_a_unit_step() {
        for dx in -3..=3 {
            for dy in -3..=3 {
                if let Some(dir) = Direction::from_delta(dx, dy) {
                    let (x, y) = dir.delta();
                    assert!(x.abs() + y.abs() <= 1, "({}, {}) accepted", x, y);
                }
            }
        }
    }

    #[test]
    fn test_player_count() {
        assert_eq!(PlayerCount::try_from(1), Ok(PlayerCount::One));
        assert_eq!(PlayerCount::try_from(2), Ok(PlayerCount::Two));
        assert!(PlayerCount::try_from(3).is_err());
        assert!(PlayerCount::try_from(0).is_err());

        assert!(PlayerCount::One.includes(Player::One));
        assert!(!PlayerCount::One.includes(Player::Two));
        assert_eq!(PlayerCount::Two.players(), &[Player::One, Player::Two]);
    }
}
