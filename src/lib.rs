//! Twin Snake - classic Snake for one or two players on a shared keyboard
//!
//! This library provides:
//! - Core game logic (game module): grid, collisions, snake movement, food and the state machine
//! - TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - Session statistics (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
