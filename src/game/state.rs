use serde::{Deserialize, Serialize};

use super::action::{Direction, Player, PlayerCount};
use super::snake::Snake;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Coarse lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Title screen, nothing moves
    #[default]
    Idle,
    Playing,
    Over,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub player_count: PlayerCount,
    /// One snake per active player, player 1 first
    pub snakes: Vec<Snake>,
    /// Food cells in spawn order
    pub foods: Vec<Position>,
    /// Shared by both players
    pub score: u32,
    pub ticks: u32,
}

impl GameState {
    /// State shown on the title screen before any session
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            player_count: PlayerCount::One,
            snakes: Vec::new(),
            foods: Vec::new(),
            score: 0,
            ticks: 0,
        }
    }

    /// Fresh session state with one snake per player and no food yet
    pub fn new(player_count: PlayerCount, starts: [Position; 2], trail_capacity: usize) -> Self {
        let snakes = player_count
            .players()
            .iter()
            .map(|player| Snake::with_trail_capacity(starts[player.index()], trail_capacity))
            .collect();

        Self {
            phase: Phase::Playing,
            player_count,
            snakes,
            foods: Vec::new(),
            score: 0,
            ticks: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Snake of an active player
    pub fn snake(&self, player: Player) -> Option<&Snake> {
        self.snakes.get(player.index())
    }

    /// Check if a position is occupied by any active snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snakes.iter().any(|snake| snake.contains(pos))
    }

    pub fn is_food(&self, pos: Position) -> bool {
        self.foods.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_in_direction(Direction::LEFT), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::DOWN), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::UP), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::NONE), pos);
    }

    #[test]
    fn test_idle_state() {
        let state = GameState::idle();
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.snakes.is_empty());
        assert!(!state.is_playing());
    }

    #[test]
    fn test_new_state_per_player_count() {
        let starts = [Position::new(10, 10), Position::new(20, 20)];

        let single = GameState::new(PlayerCount::One, starts, 5);
        assert_eq!(single.snakes.len(), 1);
        assert!(single.snake(Player::Two).is_none());
        assert!(single.is_occupied_by_snake(Position::new(10, 10)));
        assert!(!single.is_occupied_by_snake(Position::new(20, 20)));

        let duo = GameState::new(PlayerCount::Two, starts, 5);
        assert_eq!(duo.snakes.len(), 2);
        assert_eq!(duo.snake(Player::Two).unwrap().head(), Position::new(20, 20));
        assert!(duo.is_playing());
        assert_eq!(duo.score, 0);
    }
}
