use std::collections::VecDeque;

use super::action::Direction;
use super::config::MAX_SHADOW_TRAIL;
use super::state::Position;

/// Recently vacated tail cells, most recent first
///
/// Purely cosmetic: nothing in collision or scoring reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowTrail {
    cells: VecDeque<Position>,
    capacity: usize,
}

impl ShadowTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a vacated cell, dropping the oldest one past capacity
    pub fn push(&mut self, pos: Position) {
        self.cells.push_front(pos);
        if self.cells.len() > self.capacity {
            self.cells.pop_back();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Position> {
        self.cells.iter().copied().collect()
    }
}

impl Default for ShadowTrail {
    fn default() -> Self {
        Self::new(MAX_SHADOW_TRAIL)
    }
}

/// Result of moving a snake one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub new_head: Position,
    /// Tail cell given up by the move, `None` when the snake grew
    pub removed_tail: Option<Position>,
}

/// A player's snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: VecDeque<Position>,
    /// Direction applied on the next tick
    pub direction: Direction,
    pub trail: ShadowTrail,
}

impl Snake {
    /// Create a one-segment snake that is not moving yet
    pub fn new(head: Position) -> Self {
        Self::with_trail_capacity(head, MAX_SHADOW_TRAIL)
    }

    pub fn with_trail_capacity(head: Position, trail_capacity: usize) -> Self {
        Self {
            body: VecDeque::from([head]),
            direction: Direction::NONE,
            trail: ShadowTrail::new(trail_capacity),
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Cell the head would move into with the given direction
    pub fn next_head(&self, direction: Direction) -> Position {
        self.head().moved_in_direction(direction)
    }

    /// Commit a move that the caller already validated
    ///
    /// Without food the tail is dropped and pushed onto the shadow trail;
    /// with food the snake grows by one and the trail is left alone.
    pub fn advance(&mut self, direction: Direction, ate_food: bool) -> Advance {
        let new_head = self.next_head(direction);
        self.body.push_front(new_head);

        let removed_tail = if ate_food {
            None
        } else {
            let tail = self.body.pop_back();
            if let Some(tail) = tail {
                self.trail.push(tail);
            }
            tail
        };

        Advance {
            new_head,
            removed_tail,
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
