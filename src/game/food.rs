use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use super::action::PlayerCount;
use super::grid::Grid;
use super::snake::Snake;
use super::state::Position;

/// Result of topping up the food set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Food count reached the target
    Filled,
    /// No free cell was found for `missing` foods; retried on a later tick
    Exhausted { missing: usize },
}

/// Foods kept on the board: one per player
pub fn target_food_count(player_count: PlayerCount) -> usize {
    match player_count {
        PlayerCount::One => 1,
        PlayerCount::Two => 2,
    }
}

/// Append foods until `foods` holds `target` entries
///
/// Candidates on a snake segment or an existing food are rejected. Each food
/// gets `max_attempts` samples before spawning stops for this call.
pub fn ensure_food_count<R: Rng + ?Sized>(
    target: usize,
    foods: &mut Vec<Position>,
    snakes: &[Snake],
    grid: &Grid,
    rng: &mut R,
    max_attempts: u32,
) -> SpawnOutcome {
    if foods.len() >= target {
        return SpawnOutcome::Filled;
    }

    let mut occupied: HashSet<Position> = snakes
        .iter()
        .flat_map(|snake| snake.body.iter().copied())
        .chain(foods.iter().copied())
        .collect();

    while foods.len() < target {
        if occupied.len() >= grid.capacity() {
            let missing = target - foods.len();
            warn!("No free cell left for {} food(s)", missing);
            return SpawnOutcome::Exhausted { missing };
        }

        let spawned = (0..max_attempts)
            .map(|_| grid.random_position(rng))
            .find(|pos| !occupied.contains(pos));

        match spawned {
            Some(pos) => {
                occupied.insert(pos);
                foods.push(pos);
                debug!("Food spawned at ({}, {})", pos.x, pos.y);
            }
            None => {
                let missing = target - foods.len();
                warn!(
                    "Gave up spawning food after {} attempts, {} missing",
                    max_attempts, missing
                );
                return SpawnOutcome::Exhausted { missing };
            }
        }
    }

    SpawnOutcome::Filled
}
