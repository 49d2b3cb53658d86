//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! One or two snakes share a fixed square grid; the engine owns all state and
//! exposes explicit entry points for input, lifecycle and ticking.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction, Player, PlayerCount};
pub use collision::{CollisionType, MoveOutcome};
pub use config::GameConfig;
pub use engine::{GameEngine, PlayerOutcome, TickReport};
pub use food::SpawnOutcome;
pub use grid::Grid;
pub use snake::{Advance, ShadowTrail, Snake};
pub use state::{GameState, Phase, Position};
