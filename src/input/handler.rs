use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction, Phase, Player, PlayerCount};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
    None,
}

/// Maps key presses to commands for the current phase
///
/// Arrows steer player 1 and WASD steer player 2, as on a shared keyboard.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(
        &self,
        key: KeyEvent,
        phase: Phase,
        player_count: PlayerCount,
    ) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            return KeyAction::Quit;
        }

        match phase {
            Phase::Idle => Self::mode_select(key.code),
            Phase::Playing => Self::steer(key.code, player_count),
            Phase::Over => match key.code {
                KeyCode::Char(' ') => KeyAction::Game(Command::Restart),
                KeyCode::Char('b') | KeyCode::Char('B') => KeyAction::Game(Command::ReturnToTitle),
                code => Self::mode_select(code),
            },
        }
    }

    fn mode_select(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char('1') => KeyAction::Game(Command::Start(PlayerCount::One)),
            KeyCode::Char('2') => KeyAction::Game(Command::Start(PlayerCount::Two)),
            _ => KeyAction::None,
        }
    }

    fn steer(code: KeyCode, player_count: PlayerCount) -> KeyAction {
        let turn = |player, direction| KeyAction::Game(Command::Turn(player, direction));

        match code {
            // Player 1 - Arrow keys
            KeyCode::Up => turn(Player::One, Direction::UP),
            KeyCode::Down => turn(Player::One, Direction::DOWN),
            KeyCode::Left => turn(Player::One, Direction::LEFT),
            KeyCode::Right => turn(Player::One, Direction::RIGHT),

            KeyCode::Char('b') | KeyCode::Char('B') => KeyAction::Game(Command::ReturnToTitle),

            // Player 2 - WASD, only with two players
            KeyCode::Char(c) if player_count == PlayerCount::Two => {
                match c.to_ascii_lowercase() {
                    'w' => turn(Player::Two, Direction::UP),
                    's' => turn(Player::Two, Direction::DOWN),
                    'a' => turn(Player::Two, Direction::LEFT),
                    'd' => turn(Player::Two, Direction::RIGHT),
                    _ => KeyAction::None,
                }
            }

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_steer_player_one() {
        let handler = InputHandler::new();
        let cases = [
            (KeyCode::Up, Direction::UP),
            (KeyCode::Down, Direction::DOWN),
            (KeyCode::Left, Direction::LEFT),
            (KeyCode::Right, Direction::RIGHT),
        ];

        for (code, direction) in cases {
            assert_eq!(
                handler.handle_key_event(press(code), Phase::Playing, PlayerCount::One),
                KeyAction::Game(Command::Turn(Player::One, direction))
            );
        }
    }

    #[test]
    fn test_wasd_steers_player_two() {
        let handler = InputHandler::new();
        let cases = [
            ('w', Direction::UP),
            ('a', Direction::LEFT),
            ('s', Direction::DOWN),
            ('d', Direction::RIGHT),
        ];

        for (c, direction) in cases {
            assert_eq!(
                handler.handle_key_event(press(KeyCode::Char(c)), Phase::Playing, PlayerCount::Two),
                KeyAction::Game(Command::Turn(Player::Two, direction))
            );
        }

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper, Phase::Playing, PlayerCount::Two),
            KeyAction::Game(Command::Turn(Player::Two, Direction::UP))
        );
    }

    #[test]
    fn test_wasd_ignored_with_one_player() {
        let handler = InputHandler::new();
        let w = press(KeyCode::Char('w'));
        assert_eq!(
            handler.handle_key_event(w, Phase::Playing, PlayerCount::One),
            KeyAction::None
        );
    }

    #[test]
    fn test_title_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('1')), Phase::Idle, PlayerCount::One),
            KeyAction::Game(Command::Start(PlayerCount::One))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('2')), Phase::Idle, PlayerCount::One),
            KeyAction::Game(Command::Start(PlayerCount::Two))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up), Phase::Idle, PlayerCount::One),
            KeyAction::None
        );
    }

    #[test]
    fn test_game_over_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char(' ')), Phase::Over, PlayerCount::Two),
            KeyAction::Game(Command::Restart)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('b')), Phase::Over, PlayerCount::Two),
            KeyAction::Game(Command::ReturnToTitle)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('2')), Phase::Over, PlayerCount::One),
            KeyAction::Game(Command::Start(PlayerCount::Two))
        );
        // Space does nothing mid-game
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char(' ')), Phase::Playing, PlayerCount::One),
            KeyAction::None
        );
    }

    #[test]
    fn test_back_to_title_while_playing() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('B')), Phase::Playing, PlayerCount::One),
            KeyAction::Game(Command::ReturnToTitle)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        for phase in [Phase::Idle, Phase::Playing, Phase::Over] {
            assert_eq!(
                handler.handle_key_event(press(KeyCode::Char('q')), phase, PlayerCount::Two),
                KeyAction::Quit
            );
            assert_eq!(
                handler.handle_key_event(press(KeyCode::Esc), phase, PlayerCount::Two),
                KeyAction::Quit
            );
        }

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handler.handle_key_event(ctrl_c, Phase::Playing, PlayerCount::One),
            KeyAction::Quit
        );
    }
}
