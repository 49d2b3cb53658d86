//! Pure collision predicates evaluated against the state before a move

use super::grid::Grid;
use super::snake::Snake;
use super::state::Position;

/// Type of collision that ends the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// Snake hit the other player's snake
    Opponent,
}

/// What happens if a snake's head enters a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Collision(CollisionType),
    /// Index of the food that would be eaten
    Food(usize),
    Clear,
}

/// Head lands on any current segment, tail included
pub fn self_collision(head: Position, snake: &Snake) -> bool {
    snake.contains(head)
}

/// Head lands on any segment of the other active snake
pub fn opponent_collision(head: Position, other: &Snake) -> bool {
    other.contains(head)
}

/// Index of the first food at `head`, lowest index wins
pub fn food_collision(head: Position, foods: &[Position]) -> Option<usize> {
    foods.iter().position(|&food| food == head)
}

pub fn wall_collision(grid: &Grid, head: Position) -> bool {
    !grid.is_within_bounds(head)
}

/// Classify a move in the order wall, self, opponent, food
///
/// A wall or snake hit always beats food sharing the same cell.
pub fn evaluate_move(
    grid: &Grid,
    head: Position,
    snake: &Snake,
    opponent: Option<&Snake>,
    foods: &[Position],
) -> MoveOutcome {
    if wall_collision(grid, head) {
        return MoveOutcome::Collision(CollisionType::Wall);
    }

    if self_collision(head, snake) {
        return MoveOutcome::Collision(CollisionType::SelfCollision);
    }

    if let Some(other) = opponent {
        if opponent_collision(head, other) {
            return MoveOutcome::Collision(CollisionType::Opponent);
        }
    }

    match food_collision(head, foods) {
        Some(index) => MoveOutcome::Food(index),
        None => MoveOutcome::Clear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_from(cells: &[(i32, i32)]) -> Snake {
        let mut snake = Snake::new(Position::new(cells[0].0, cells[0].1));
        for &(x, y) in &cells[1..] {
            snake.body.push_back(Position::new(x, y));
        }
        snake
    }

    #[test]
    fn test_food_collision_empty() {
        assert_eq!(food_collision(Position::new(3, 3), &[]), None);
    }

    #[test]
    fn test_food_collision_first_match_wins() {
        let foods = [
            Position::new(1, 1),
            Position::new(3, 3),
            Position::new(3, 3),
        ];
        assert_eq!(food_collision(Position::new(3, 3), &foods), Some(1));
        assert_eq!(food_collision(Position::new(1, 1), &foods), Some(0));
        assert_eq!(food_collision(Position::new(2, 2), &foods), None);
    }

    #[test]
    fn test_self_collision_includes_tail() {
        let snake = snake_from(&[(5, 5), (5, 6), (4, 6), (4, 5)]);
        assert!(self_collision(Position::new(4, 5), &snake));
        assert!(self_collision(Position::new(5, 6), &snake));
        assert!(!self_collision(Position::new(6, 5), &snake));
    }

    #[test]
    fn test_opponent_collision() {
        let other = snake_from(&[(8, 8), (8, 9)]);
        assert!(opponent_collision(Position::new(8, 9), &other));
        assert!(!opponent_collision(Position::new(7, 9), &other));
    }

    #[test]
    fn test_wall_preempts_everything() {
        let grid = Grid::new(10);
        let snake = snake_from(&[(0, 5)]);
        let foods = [Position::new(-1, 5)];

        let outcome = evaluate_move(&grid, Position::new(-1, 5), &snake, None, &foods);
        assert_eq!(outcome, MoveOutcome::Collision(CollisionType::Wall));
    }

    #[test]
    fn test_self_preempts_opponent_and_food() {
        let grid = Grid::new(10);
        let snake = snake_from(&[(5, 5), (6, 5)]);
        let other = snake_from(&[(6, 5)]);
        let foods = [Position::new(6, 5)];

        let outcome = evaluate_move(&grid, Position::new(6, 5), &snake, Some(&other), &foods);
        assert_eq!(outcome, MoveOutcome::Collision(CollisionType::SelfCollision));
    }

    #[test]
    fn test_opponent_preempts_food() {
        let grid = Grid::new(10);
        let snake = snake_from(&[(5, 5)]);
        let other = snake_from(&[(6, 5), (7, 5)]);
        let foods = [Position::new(6, 5)];

        let outcome = evaluate_move(&grid, Position::new(6, 5), &snake, Some(&other), &foods);
        assert_eq!(outcome, MoveOutcome::Collision(CollisionType::Opponent));

        // Without an opponent the same cell is just food
        let outcome = evaluate_move(&grid, Position::new(6, 5), &snake, None, &foods);
        assert_eq!(outcome, MoveOutcome::Food(0));
    }

    #[test]
    fn test_clear_move() {
        let grid = Grid::new(10);
        let snake = snake_from(&[(5, 5)]);
        let outcome = evaluate_move(&grid, Position::new(5, 4), &snake, None, &[]);
        assert_eq!(outcome, MoveOutcome::Clear);
    }
}
