use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use super::{
    action::{Command, Direction, Player, PlayerCount},
    collision::{evaluate_move, CollisionType, MoveOutcome},
    config::GameConfig,
    food::{ensure_food_count, target_food_count, SpawnOutcome},
    grid::Grid,
    state::{GameState, Phase},
};

/// What one player's snake did during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// Direction is still (0, 0)
    Idle,
    Moved { ate_food: bool },
    /// The move was refused and the game ended
    Crashed(CollisionType),
}

/// Result of a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Players resolved this tick, in order; a crash cuts the list short
    pub outcomes: Vec<(Player, PlayerOutcome)>,
    /// Whether the score display needs refreshing
    pub score_changed: bool,
    /// Set when food had to be replenished
    pub spawn: Option<SpawnOutcome>,
}

impl TickReport {
    pub fn outcome(&self, player: Player) -> Option<PlayerOutcome> {
        self.outcomes
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, outcome)| *outcome)
    }

    /// The collision that ended the game, if any
    pub fn collision(&self) -> Option<(Player, CollisionType)> {
        self.outcomes.iter().find_map(|(player, outcome)| match outcome {
            PlayerOutcome::Crashed(kind) => Some((*player, *kind)),
            _ => None,
        })
    }

    pub fn terminated(&self) -> bool {
        self.collision().is_some()
    }
}

/// Owns the session state and drives it one tick at a time
///
/// All mutation goes through `&mut self`, so ticks and input can never
/// interleave.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
    state: GameState,
}

impl GameEngine {
    /// Create a new engine on the title screen
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            grid: Grid::new(config.tile_count),
            config,
            rng,
            state: GameState::idle(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only snapshot for renderers
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Dispatch an external command, returning whether it had any effect
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Turn(player, direction) => self.set_direction(player, direction),
            Command::Start(player_count) => self.start(player_count),
            Command::Restart => self.restart(),
            Command::ReturnToTitle => self.return_to_title(),
        }
    }

    /// Begin a session from the title or game-over screen
    pub fn start(&mut self, player_count: PlayerCount) -> bool {
        if self.state.is_playing() {
            return false;
        }
        info!("Starting {}-player game", player_count.get());
        self.reset(player_count);
        true
    }

    /// Play again with the previous player count; only valid after a game over
    pub fn restart(&mut self) -> bool {
        if self.state.phase != Phase::Over {
            return false;
        }
        info!("Restarting after game over (score {})", self.state.score);
        self.reset(self.state.player_count);
        true
    }

    /// Stop ticking and show the title screen; the last state stays readable
    pub fn return_to_title(&mut self) -> bool {
        if self.state.phase == Phase::Idle {
            return false;
        }
        info!("Returning to title");
        self.state.phase = Phase::Idle;
        true
    }

    /// Steer a player from the next tick on
    ///
    /// Ignored outside of play, for players not in the session, and for
    /// exact reversals of the current direction.
    pub fn set_direction(&mut self, player: Player, direction: Direction) -> bool {
        if !self.state.is_playing() || !self.state.player_count.includes(player) {
            return false;
        }
        let Some(snake) = self.state.snakes.get_mut(player.index()) else {
            return false;
        };
        if snake.direction.is_opposite(direction) {
            return false;
        }
        snake.direction = direction;
        true
    }

    /// Advance the session by one step
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if !self.state.is_playing() {
            return report;
        }

        self.state.ticks += 1;

        for &player in self.state.player_count.players() {
            let outcome = self.step_player(player);
            report.outcomes.push((player, outcome));

            match outcome {
                PlayerOutcome::Crashed(kind) => {
                    self.state.phase = Phase::Over;
                    info!(
                        "Game over: player {} {:?} at tick {}, score {}",
                        player.index() + 1,
                        kind,
                        self.state.ticks,
                        self.state.score
                    );
                    return report;
                }
                PlayerOutcome::Moved { ate_food: true } => {
                    report.score_changed = true;
                }
                _ => {}
            }
        }

        // Runs after every move is committed so new food avoids final positions.
        // A shortfall left by an exhausted spawn is retried here too.
        if self.state.foods.len() < target_food_count(self.state.player_count) {
            report.spawn = Some(self.replenish_food());
        }

        report
    }

    fn step_player(&mut self, player: Player) -> PlayerOutcome {
        let index = player.index();
        let snake = &self.state.snakes[index];
        let direction = snake.direction;
        if !direction.is_moving() {
            return PlayerOutcome::Idle;
        }

        let head = snake.next_head(direction);
        let opponent = match self.state.player_count {
            PlayerCount::One => None,
            PlayerCount::Two => self.state.snakes.get(1 - index),
        };

        let ate_food = match evaluate_move(&self.grid, head, snake, opponent, &self.state.foods) {
            MoveOutcome::Collision(kind) => return PlayerOutcome::Crashed(kind),
            MoveOutcome::Food(food_index) => {
                self.state.foods.remove(food_index);
                self.state.score += self.config.food_reward;
                debug!(
                    "Player {} ate food at ({}, {}). Score: {}",
                    index + 1,
                    head.x,
                    head.y,
                    self.state.score
                );
                true
            }
            MoveOutcome::Clear => false,
        };

        self.state.snakes[index].advance(direction, ate_food);
        PlayerOutcome::Moved { ate_food }
    }

    fn replenish_food(&mut self) -> SpawnOutcome {
        ensure_food_count(
            target_food_count(self.state.player_count),
            &mut self.state.foods,
            &self.state.snakes,
            &self.grid,
            &mut self.rng,
            self.config.max_spawn_attempts,
        )
    }

    /// Fresh snakes, score and food; phase becomes Playing
    fn reset(&mut self, player_count: PlayerCount) {
        self.state = GameState::new(
            player_count,
            [self.config.player1_start, self.config.player2_start],
            self.config.max_shadow_trail,
        );
        self.replenish_food();
    }
}
